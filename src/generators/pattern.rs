// src/generators/pattern.rs
use regex_syntax::hir::{Capture, Class, ClassBytes, ClassBytesRange, ClassUnicode, ClassUnicodeRange, Hir, HirKind, Repetition};

/// Compile a regex into a sampler whose classes only yield printable ASCII.
///
/// Anchors and word boundaries carry no characters, so they are dropped
/// before sampling. Literals written in the pattern are kept as they are.
pub fn compile_printable(pattern: &str, max_repeat: u32) -> Result<rand_regex::Regex, String> {
    let hir = regex_syntax::Parser::new().parse(pattern).map_err(|e| e.to_string())?;
    rand_regex::Regex::with_hir(printable(hir)?, max_repeat).map_err(|e| e.to_string())
}

const NO_PRINTABLE: &str = "character class has no printable ASCII characters";

fn printable(hir: Hir) -> Result<Hir, String> {
    let narrowed = match hir.into_kind() {
        HirKind::Empty | HirKind::Look(_) => Hir::empty(),
        HirKind::Literal(literal) => Hir::literal(literal.0),
        HirKind::Class(Class::Unicode(mut class)) => {
            class.intersect(&ClassUnicode::new([ClassUnicodeRange::new(' ', '~')]));
            if class.ranges().is_empty() {
                return Err(NO_PRINTABLE.to_string());
            }
            Hir::class(Class::Unicode(class))
        }
        HirKind::Class(Class::Bytes(mut class)) => {
            class.intersect(&ClassBytes::new([ClassBytesRange::new(b' ', b'~')]));
            if class.ranges().is_empty() {
                return Err(NO_PRINTABLE.to_string());
            }
            Hir::class(Class::Bytes(class))
        }
        HirKind::Repetition(rep) => Hir::repetition(Repetition {
            sub: Box::new(printable(*rep.sub)?),
            ..rep
        }),
        HirKind::Capture(cap) => Hir::capture(Capture {
            sub: Box::new(printable(*cap.sub)?),
            ..cap
        }),
        HirKind::Concat(subs) => Hir::concat(subs.into_iter().map(printable).collect::<Result<_, _>>()?),
        HirKind::Alternation(subs) => {
            Hir::alternation(subs.into_iter().map(printable).collect::<Result<_, _>>()?)
        }
    };
    Ok(narrowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{distributions::Distribution, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn samples(pattern: &str) -> Vec<String> {
        let regex = compile_printable(pattern, 100).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        (0..50).map(|_| regex.sample(&mut rng)).collect()
    }

    #[test]
    fn shorthand_classes_stay_in_ascii() {
        for s in samples(r"\d{12}") {
            assert_eq!(s.len(), 12);
            assert!(s.chars().all(|c| c.is_ascii_digit()), "{:?}", s);
        }
        for s in samples(r"\w{20}") {
            assert_eq!(s.len(), 20);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'), "{:?}", s);
        }
        for s in samples(r".{10}") {
            assert_eq!(s.len(), 10);
            assert!(s.chars().all(|c| (' '..='~').contains(&c)), "{:?}", s);
        }
    }

    #[test]
    fn anchors_are_ignored() {
        for s in samples(r"^[a-z]{8}$") {
            assert_eq!(s.len(), 8);
            assert!(s.chars().all(|c| c.is_ascii_lowercase()));
        }
        for s in samples(r"\A\bab\b\z") {
            assert_eq!(s, "ab");
        }
    }

    #[test]
    fn pattern_literals_are_kept() {
        assert!(samples("é{2}").iter().all(|s| s == "éé"));
    }

    #[test]
    fn classes_with_no_ascii_member_are_rejected() {
        assert_eq!(compile_printable(r"\p{Greek}", 100).err().as_deref(), Some(NO_PRINTABLE));
        assert!(compile_printable("([a-z", 100).is_err());
    }
}
