//! Reading duration estimation.

/// Words-per-minute assumed for a child reading along with a parent.
const WORDS_PER_MINUTE: usize = 200;

/// Minimum reported duration in seconds.
const FLOOR_SECONDS: i32 = 60;

/// Estimate reading duration in seconds for a story body.
///
/// Uses a 200 words/minute pace over the whitespace-delimited word count,
/// floored at 60 seconds.
///
/// # Examples
///
/// ```
/// use cuentista_core::estimate_read_seconds;
///
/// let body = "palabra ".repeat(1000);
/// assert_eq!(estimate_read_seconds(&body), 300);
/// ```
pub fn estimate_read_seconds(body: &str) -> i32 {
    let words = body.split_whitespace().count();
    let seconds = (words * 60 / WORDS_PER_MINUTE) as i32;
    seconds.max(FLOOR_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(words: usize) -> String {
        vec!["palabra"; words].join(" ")
    }

    #[test]
    fn two_hundred_words_hits_the_floor() {
        assert_eq!(estimate_read_seconds(&body_of(200)), 60);
    }

    #[test]
    fn thousand_words_is_five_minutes() {
        assert_eq!(estimate_read_seconds(&body_of(1000)), 300);
    }

    #[test]
    fn short_bodies_are_floored() {
        assert_eq!(estimate_read_seconds(""), 60);
        assert_eq!(estimate_read_seconds(&body_of(10)), 60);
    }
}
