//! Start-case rendering of bucket keys.

/// Render `text` in start case: words separated by single spaces, each
/// beginning with an upper-case character.
///
/// Apostrophes are dropped first (`don't` becomes one word). Word
/// boundaries fall at every other non-alphanumeric character, between a
/// lower-case and an upper-case letter, and between letters and digits,
/// except that an ordinal such as `4th` or `21ST` stays one word.
/// Characters after the first in each word keep their case. Accented
/// letters are kept as they are, not folded to their ASCII base.
pub fn start_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| upper_first(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
}

fn classify(c: char) -> Option<CharClass> {
    if c.is_numeric() {
        Some(CharClass::Digit)
    } else if c.is_uppercase() {
        Some(CharClass::Upper)
    } else if c.is_alphabetic() {
        Some(CharClass::Lower)
    } else {
        None
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().filter(|&c| !is_apostrophe(c)).collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let Some(class) = classify(chars[i]) else {
            i += 1;
            continue;
        };

        let mut end = i + 1;
        match class {
            CharClass::Digit => {
                while end < chars.len() && classify(chars[end]) == Some(CharClass::Digit) {
                    end += 1;
                }
                end += ordinal_suffix_len(&chars, end);
            }
            CharClass::Lower | CharClass::Upper => {
                let mut prev = class;
                while end < chars.len() {
                    match classify(chars[end]) {
                        Some(CharClass::Upper) if prev == CharClass::Lower => break,
                        Some(next @ (CharClass::Lower | CharClass::Upper)) => prev = next,
                        _ => break,
                    }
                    end += 1;
                }
            }
        }

        words.push(chars[i..end].iter().collect());
        i = end;
    }
    words
}

/// Length of an ordinal suffix (`st`, `nd`, `rd`, `th`) directly after the
/// digit run ending at `end`, or 0 if there is none.
///
/// The suffix must agree with the last digit (`1st`, `2nd`, `3rd`, `4th`,
/// `11th` does not qualify) and be all lower-case or all upper-case. A
/// lower-case suffix may not run on into another lower-case letter or
/// digit; an upper-case one may not run on into an upper-case letter or
/// digit.
fn ordinal_suffix_len(chars: &[char], end: usize) -> usize {
    let (Some(&last), Some(&a), Some(&b)) = (
        end.checked_sub(1).and_then(|i| chars.get(i)),
        chars.get(end),
        chars.get(end + 1),
    ) else {
        return 0;
    };

    let expected = match last {
        '1' => "st",
        '2' => "nd",
        '3' => "rd",
        _ => "th",
    };
    let suffix: String = [a, b].iter().collect();
    let blocked = match chars.get(end + 2).copied().and_then(classify) {
        Some(CharClass::Digit) => true,
        Some(next) if suffix == expected => next == CharClass::Lower,
        Some(next) if suffix == expected.to_uppercase() => next == CharClass::Upper,
        _ => false,
    };

    if (suffix == expected || suffix == expected.to_uppercase()) && !blocked {
        2
    } else {
        0
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
