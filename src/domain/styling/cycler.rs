//! StyleCycler - repeats a message while rotating through the palette.

use serde::Serialize;

use crate::domain::foundation::RepeatCount;

use super::errors::StyleError;
use super::palette::{StyleName, PALETTE_SIZE};

/// One output line of the cycler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledLine {
    pub text: String,
    pub style: StyleName,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, style: StyleName) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Stateless style rotation.
///
/// The style of each line is derived from its position alone, so repeated
/// calls with the same input always produce the same sequence.
pub struct StyleCycler;

impl StyleCycler {
    /// Repeats `message` `repeat_count` times, line i styled `PALETTE[i % 9]`.
    ///
    /// Defined for every non-negative count. The lines are collected eagerly,
    /// so very large counts should go through [`StyleCycler::lines`] instead.
    ///
    /// # Errors
    /// - `StyleError::InvalidArgument` if `repeat_count` is negative.
    pub fn cycle(message: &str, repeat_count: i64) -> Result<Vec<StyledLine>, StyleError> {
        let count = RepeatCount::try_new(repeat_count)?;
        Ok(Self::lines(message, count).collect())
    }

    /// Lazy form of [`StyleCycler::cycle`] for an already validated count.
    pub fn lines(message: &str, count: RepeatCount) -> impl Iterator<Item = StyledLine> + '_ {
        (0..count.value()).map(move |i| {
            let position = (i % PALETTE_SIZE as u64) as usize;
            StyledLine::new(message, StyleName::for_position(position))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::styling::palette::PALETTE;
    use proptest::prelude::*;

    #[test]
    fn cycle_zero_is_empty() {
        assert!(StyleCycler::cycle("Hola", 0).unwrap().is_empty());
    }

    #[test]
    fn cycle_nine_uses_each_style_once_in_order() {
        let lines = StyleCycler::cycle("Hola", 9).unwrap();
        let styles: Vec<_> = lines.iter().map(|l| l.style).collect();
        assert_eq!(styles, PALETTE.to_vec());
    }

    #[test]
    fn cycle_eleven_wraps_to_start_of_palette() {
        let lines = StyleCycler::cycle("Hola", 11).unwrap();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[9].style, PALETTE[0]);
        assert_eq!(lines[10].style, PALETTE[1]);
        assert!(lines.iter().all(|l| l.text == "Hola"));
    }

    #[test]
    fn cycle_allows_empty_message() {
        let lines = StyleCycler::cycle("", 2).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "");
    }

    #[test]
    fn cycle_rejects_negative_count() {
        let err = StyleCycler::cycle("Hola", -1).unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidArgument(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn lines_is_lazy_and_restartable() {
        let count = RepeatCount::new(3);
        let first: Vec<_> = StyleCycler::lines("x", count).collect();
        let second: Vec<_> = StyleCycler::lines("x", count).collect();
        assert_eq!(first, second);
        assert_eq!(StyleCycler::lines("x", RepeatCount::new(u32::MAX.into())).take(2).count(), 2);
    }

    #[test]
    fn lines_beyond_u32_keep_rotating() {
        let count = RepeatCount::try_new(i64::MAX).unwrap();
        let styles: Vec<_> = StyleCycler::lines("x", count)
            .skip(PALETTE_SIZE)
            .take(2)
            .map(|l| l.style)
            .collect();
        assert_eq!(styles, vec![PALETTE[0], PALETTE[1]]);
    }

    proptest! {
        #[test]
        fn cycle_length_and_styles_follow_position(message in ".{0,16}", count in 0i64..200) {
            let lines = StyleCycler::cycle(&message, count).unwrap();
            prop_assert_eq!(lines.len() as i64, count);
            for (i, line) in lines.iter().enumerate() {
                prop_assert_eq!(line.style, PALETTE[i % PALETTE_SIZE]);
                prop_assert_eq!(&line.text, &message);
            }
        }

        #[test]
        fn cycle_is_deterministic(message in ".{0,16}", count in 0i64..100) {
            prop_assert_eq!(
                StyleCycler::cycle(&message, count).unwrap(),
                StyleCycler::cycle(&message, count).unwrap()
            );
        }

        #[test]
        fn cycle_rejects_every_negative_count(count in i64::MIN..0) {
            prop_assert!(StyleCycler::cycle("m", count).is_err());
        }
    }
}
