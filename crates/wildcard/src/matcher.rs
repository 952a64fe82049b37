// local imports
use crate::element::Element;

// ---

/// Tests whether the whole `subject` matches `pattern`.
///
/// Works over any [`Element`] sequence:
/// - `.` consumes exactly one element
/// - `?` consumes zero or one element
/// - `*` consumes zero or more elements
/// - anything else must be equal to the subject element
///
/// The scan keeps two cursors and at most one pending anchor per wildcard
/// kind, so it never recurses and needs no extra memory. When a literal
/// fails to match, the most recent `?` is retried as "zero elements" first,
/// and only then the most recent `*` is extended by one element.
///
/// # Examples
///
/// ```
/// use wildcard::matcher::matches;
///
/// assert!(matches(b"match * with *", b"match a string with two words"));
/// assert!(matches(b"a?", b"a"));
/// assert!(matches(b"a?", b"ab"));
/// assert!(!matches(b"a?", b"abc"));
/// assert!(matches(&['?', '?'], &['🦀', '🎉']));
/// ```
pub fn matches<E: Element>(pattern: &[E], subject: &[E]) -> bool {
    let mut p = 0;
    let mut s = 0;
    let mut star: Option<StarAnchor> = None;
    let mut question: Option<QuestionAnchor<E>> = None;

    while s < subject.len() {
        let Some(&pe) = pattern.get(p) else {
            match star.as_mut() {
                Some(anchor) => {
                    (p, s) = anchor.advance();
                    continue;
                }
                None => return false,
            }
        };

        let se = subject[s];
        if pe == E::STAR {
            star = Some(StarAnchor { pattern: p, subject: s });
            p += 1;
            continue;
        } else if pe == E::QUESTION {
            question = Some(QuestionAnchor {
                pattern: p,
                subject: s,
                element: se,
            });
        } else if pe != E::DOT {
            if pe != se {
                if let Some(anchor) = question.take() {
                    (p, s) = (anchor.pattern + 1, anchor.subject);
                    continue;
                }
                if let Some(anchor) = star.as_mut() {
                    (p, s) = anchor.advance();
                    continue;
                }
                return false;
            }

            // the `?` stays a valid retry point only while the subject repeats what it took
            if question.is_some_and(|anchor| anchor.element != se) {
                question = None;
            }
        }

        p += 1;
        s += 1;
    }

    // subject is exhausted, only `*` and `?` may remain
    while let Some(&pe) = pattern.get(p) {
        if pe == E::STAR {
            p += 1;
        } else if pe == E::QUESTION {
            if s >= subject.len() {
                s = s.saturating_sub(1);
            }
            p += 1;
        } else {
            break;
        }
    }

    p == pattern.len()
}

// ---

#[derive(Debug, Clone, Copy)]
struct StarAnchor {
    pattern: usize,
    subject: usize,
}

impl StarAnchor {
    /// Lets the star consume one more element and returns the cursors to resume from.
    #[inline]
    fn advance(&mut self) -> (usize, usize) {
        self.subject += 1;
        (self.pattern + 1, self.subject)
    }
}

#[derive(Debug, Clone, Copy)]
struct QuestionAnchor<E> {
    pattern: usize,
    subject: usize,
    element: E,
}
