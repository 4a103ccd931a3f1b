//! Character-level scanning for SVG path data.
//!
//! Implements the two lowest layers of the path engine: splitting a `d`
//! string into `(command letter, argument substring)` segments, and
//! extracting numeric literals from an argument substring. Both are
//! permissive: anything unrecognised is skipped, never rejected.

const COMMAND_LETTERS: &str = "MmLlHhVvZzCcSsQqTtAa";

pub fn is_command_letter(c: char) -> bool {
    COMMAND_LETTERS.contains(c)
}

pub struct PathScanner {
    data: Vec<char>,
    index: usize,
}

impl PathScanner {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn peek(&self, n: usize) -> Option<char> {
        self.data.get(self.index + n).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    pub fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's
        // is_ascii_whitespace() also includes 0xC, but is close enough
        // and convenient.
        while !self.at_end() && self.current().unwrap().is_ascii_whitespace() {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    /// Read one numeric literal starting at the current character, or
    /// `None` if no parseable number starts here. Always consumes at
    /// least the characters it inspected, so callers make progress on
    /// malformed input.
    pub fn read_number(&mut self) -> Option<f32> {
        let mut mult = 1.;
        match self.current() {
            Some('-') => {
                mult = -1.;
                self.advance();
            }
            Some('+') => {
                self.advance();
            }
            _ => {}
        }
        self.read_non_negative().map(|v| mult * v)
    }

    fn read_non_negative(&mut self) -> Option<f32> {
        let mut s = String::new();
        let mut dot_valid = true;
        let mut exp_valid = true;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    s.push(ch);
                    self.advance();
                }
                '.' if dot_valid => {
                    s.push(ch);
                    self.advance();
                    dot_valid = false;
                }
                'e' | 'E'
                    if exp_valid
                        && s.ends_with(|c: char| c.is_ascii_digit())
                        && self.exponent_follows() =>
                {
                    s.push(ch);
                    self.advance();
                    // include sign character if present
                    if let Some(sign @ ('-' | '+')) = self.current() {
                        s.push(sign);
                        self.advance();
                    }
                    exp_valid = false;
                    dot_valid = false;
                }
                _ => break,
            }
        }
        self.skip_wsp_comma();
        s.parse().ok()
    }

    // 'e' starts an exponent only when a (possibly signed) digit follows;
    // otherwise it terminates the number, e.g. '1e3.5' is '1e3' then '.5'
    // while a bare '1e' yields just '1'.
    fn exponent_follows(&self) -> bool {
        match self.peek(1) {
            Some('0'..='9') => true,
            Some('+' | '-') => matches!(self.peek(2), Some('0'..='9')),
            _ => false,
        }
    }
}

/// Split raw path data into ordered `(command letter, argument substring)`
/// segments. Characters before the first command letter are dropped; an
/// empty or whitespace-only string yields no segments.
pub fn segments(data: &str) -> Vec<(char, String)> {
    let mut segs = Vec::new();
    let mut chars = data.chars().peekable();
    while let Some(c) = chars.next() {
        if !is_command_letter(c) {
            continue;
        }
        let mut args = String::new();
        while let Some(&ch) = chars.peek() {
            if is_command_letter(ch) {
                break;
            }
            args.push(ch);
            chars.next();
        }
        segs.push((c, args));
    }
    segs
}

/// Extract every numeric literal from an argument substring. Tokens are
/// separated by any mix of whitespace and commas, and may be squished
/// together where unambiguous per the SVG path grammar; anything that is
/// not part of a number is skipped.
pub fn scan_numbers(args: &str) -> Vec<f32> {
    let mut scanner = PathScanner::new(args);
    let mut numbers = Vec::new();
    while !scanner.at_end() {
        match scanner.current().unwrap() {
            '0'..='9' | '.' | '+' | '-' => {
                if let Some(n) = scanner.read_number() {
                    numbers.push(n);
                }
            }
            _ => scanner.advance(),
        }
    }
    numbers
}
