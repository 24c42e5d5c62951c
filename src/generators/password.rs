// src/generators/password.rs
use std::collections::HashSet;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand::distributions::Distribution;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use crate::models::{CharClass, PasswordGenerationOptions, PasswordResult};
use crate::crypto;

/// Upper bound for `*`, `+` and open-ended `{n,}` repeats in regex mode.
const REGEX_MAX_REPEAT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Regex,
    Leet,
    Counts,
}

fn exceeds_message(mode: &GenerationMode) -> &'static str {
    match mode {
        GenerationMode::Regex => "Regex output exceeds requested total length",
        GenerationMode::Leet => "Leet-speak output exceeds requested total length",
        GenerationMode::Counts => "Counts exceed requested total length",
    }
}

fn mode_name(mode: &GenerationMode) -> &'static str {
    match mode {
        GenerationMode::Regex => "regex",
        GenerationMode::Leet => "leet",
        GenerationMode::Counts => "counts",
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("Prefix or suffix contains excluded characters")]
    ExcludedAffix,

    #[error("No available characters after applying exclusions")]
    NoAvailableCharacters,

    #[error("No characters left in {0} pool after exclusions")]
    EmptyPool(CharClass),

    #[error("Total length ({total}) is less than required by {required_by} ({required})")]
    TotalLengthTooShort {
        total: usize,
        required: usize,
        required_by: &'static str,
    },

    #[error("{}", exceeds_message(.0))]
    ExceedsTotalLength(GenerationMode),

    #[error("No characters left to pad {} result", mode_name(.0))]
    NothingToPad(GenerationMode),

    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    #[error("Generated password contains excluded characters")]
    ExcludedInOutput,
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Generates passwords for one validated set of options.
///
/// Pools, exclusions and the regex sampler are prepared once in [`PasswordGenerator::new`]
/// and reused for every password of a batch.
pub struct PasswordGenerator {
    options: PasswordGenerationOptions,
    exclude: HashSet<char>,
    pools: Vec<(CharClass, Vec<char>)>,
    available: Vec<char>,
    leet_body: Option<Vec<char>>,
    regex: Option<rand_regex::Regex>,
}

impl PasswordGenerator {
    pub fn new(options: PasswordGenerationOptions) -> Result<Self> {
        let exclude: HashSet<char> = options.exclude_chars.chars().collect();

        if options.prefix.chars().chain(options.suffix.chars()).any(|c| exclude.contains(&c)) {
            return Err(GenerateError::ExcludedAffix);
        }

        let use_regex = !options.regex.is_empty();
        let use_custom = !options.custom.is_empty();

        let mut active: Vec<CharClass> = CharClass::ALL
            .iter()
            .copied()
            .filter(|class| options.count_for(*class) > 0 || use_regex || use_custom)
            .collect();
        if active.is_empty() {
            active = CharClass::ALL.to_vec();
        }

        let pools: Vec<(CharClass, Vec<char>)> = active
            .into_iter()
            .map(|class| {
                let pool = class.pool().chars().filter(|c| !exclude.contains(c)).collect();
                (class, pool)
            })
            .collect();
        let available: Vec<char> = pools.iter().flat_map(|(_, pool)| pool.iter().copied()).collect();

        if available.is_empty() && !use_regex && !use_custom {
            return Err(GenerateError::NoAvailableCharacters);
        }

        let regex = if use_regex {
            let compiled = super::pattern::compile_printable(&options.regex, REGEX_MAX_REPEAT)
                .map_err(GenerateError::InvalidRegex)?;
            Some(compiled)
        } else {
            None
        };

        // Leet output does not depend on randomness, convert it once
        let leet_body = (!use_regex && use_custom).then(|| {
            super::leet::to_leet(&options.custom)
                .chars()
                .filter(|c| !exclude.contains(c))
                .collect()
        });

        Ok(Self {
            options,
            exclude,
            pools,
            available,
            leet_body,
            regex,
        })
    }

    pub fn mode(&self) -> GenerationMode {
        if self.regex.is_some() {
            GenerationMode::Regex
        } else if self.leet_body.is_some() {
            GenerationMode::Leet
        } else {
            GenerationMode::Counts
        }
    }

    /// Generate a single password.
    pub fn generate_password<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let affix_len = self.options.prefix.chars().count() + self.options.suffix.chars().count();
        let total_length = self.options.total_length;
        let mode = self.mode();

        let mut body: Vec<char> = match (&self.regex, &self.leet_body) {
            (Some(sampler), _) => {
                let sample: String = Distribution::<String>::sample(sampler, rng);
                sample.chars().filter(|c| !self.exclude.contains(c)).collect()
            }
            (None, Some(leet)) => leet.clone(),
            (None, None) => {
                let required = self.options.counts_total() + affix_len;
                if total_length > 0 && total_length < required {
                    return Err(GenerateError::TotalLengthTooShort {
                        total: total_length,
                        required,
                        required_by: "counts + prefix/suffix",
                    });
                }

                let mut chars = Vec::with_capacity(required.max(total_length));
                for (class, pool) in &self.pools {
                    let count = self.options.count_for(*class);
                    if count == 0 {
                        continue;
                    }
                    if pool.is_empty() {
                        return Err(GenerateError::EmptyPool(*class));
                    }
                    chars.extend((0..count).map(|_| pick(&mut *rng, pool)));
                }
                chars
            }
        };

        if total_length > 0 {
            if mode != GenerationMode::Counts && total_length < affix_len {
                return Err(GenerateError::TotalLengthTooShort {
                    total: total_length,
                    required: affix_len,
                    required_by: "prefix/suffix",
                });
            }

            let used = body.len() + affix_len;
            if used > total_length {
                return Err(GenerateError::ExceedsTotalLength(mode));
            }
            let remaining = total_length - used;
            if remaining > 0 {
                if self.available.is_empty() {
                    return Err(GenerateError::NothingToPad(mode));
                }
                body.extend((0..remaining).map(|_| pick(&mut *rng, &self.available)));
            }
        }

        body.shuffle(rng);

        let mut password = String::with_capacity(body.len() + affix_len);
        password.push_str(&self.options.prefix);
        password.extend(body);
        password.push_str(&self.options.suffix);

        if password.chars().any(|c| self.exclude.contains(&c)) {
            return Err(GenerateError::ExcludedInOutput);
        }

        Ok(password)
    }

    /// Generate `amount` passwords and score each one.
    ///
    /// A seeded generator produces the same batch on every call.
    pub fn generate_batch(&self) -> Result<Vec<PasswordResult>> {
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };

        (0..self.options.amount.max(1))
            .map(|_| {
                let password = self.generate_password(&mut rng)?;
                Ok(PasswordResult {
                    strength: crypto::analyze_password_strength(&password),
                    entropy: crypto::calculate_entropy(&password),
                    password,
                })
            })
            .collect()
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[char]) -> char {
    pool[rng.gen_range(0..pool.len())]
}
