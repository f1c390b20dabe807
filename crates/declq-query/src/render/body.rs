//! Brace-depth re-layout of function bodies.
//!
//! The scanner is lexical, not syntactic: it knows about string, character,
//! and raw-string literals, comments, preprocessor lines, and parentheses,
//! and splits everything else into one statement per line. A `{` opens an
//! indented block when it follows a control header (`if (...)`, `else`,
//! `do`, `case x:`) and is kept inline otherwise, so brace initializers such
//! as `return {x, y};` stay on one line.

/// One line of a re-laid-out body, indented `depth` levels below the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line {
    pub depth: usize,
    pub text: String,
}

/// Words that may sit between `)` and a block's `{`, or open one directly.
const BLOCK_WORDS: &[&str] = &[
    "else", "try", "do", "const", "noexcept", "override", "final", "mutable",
];
const TYPE_HEADS: &[&str] = &["struct", "class", "union", "enum", "namespace"];
const RAW_PREFIXES: &[&str] = &["R", "LR", "uR", "UR", "u8R"];

pub(crate) fn reflow(body: &str) -> Vec<Line> {
    Reflow {
        chars: body.chars().collect(),
        pos: 0,
        lines: Vec::new(),
        current: String::new(),
        depth: 0,
        parens: 0,
        inline_braces: 0,
        blocks: Vec::new(),
    }
    .run()
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Trailing identifier-like token of `text`.
fn last_word(text: &str) -> &str {
    text.rsplit(|c: char| !is_ident(c)).next().unwrap_or_default()
}

struct Reflow {
    chars: Vec<char>,
    pos: usize,
    lines: Vec<Line>,
    current: String,
    depth: usize,
    parens: usize,
    inline_braces: usize,
    /// One entry per open block: whether `do` opened it.
    blocks: Vec<bool>,
}

impl Reflow {
    fn run(mut self) -> Vec<Line> {
        while let Some(ch) = self.peek(0) {
            match ch {
                '"' => self.string_literal(),
                '\'' => self.char_literal(),
                '/' if self.peek(1) == Some('/') => self.line_comment(),
                '/' if self.peek(1) == Some('*') => self.block_comment(),
                '#' if self.current.trim().is_empty() => self.directive(),
                '{' => self.open_brace(),
                '}' => self.close_brace(),
                ';' if self.parens == 0 && self.inline_braces == 0 => {
                    self.take();
                    self.flush();
                }
                '(' => {
                    self.parens += 1;
                    self.take();
                }
                ')' => {
                    self.parens = self.parens.saturating_sub(1);
                    self.take();
                }
                c if c.is_whitespace() => {
                    self.pos += 1;
                    self.space();
                }
                _ => {
                    self.take();
                }
            }
        }
        self.flush();
        self.lines
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Copy the next character into the current line.
    fn take(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        self.pos += 1;
        self.current.push(ch);
        Some(ch)
    }

    fn space(&mut self) {
        if !self.current.is_empty() && !self.current.ends_with(' ') {
            self.current.push(' ');
        }
    }

    fn flush(&mut self) {
        let text = self.current.trim();
        if !text.is_empty() {
            self.lines.push(Line {
                depth: self.depth,
                text: text.to_string(),
            });
        }
        self.current.clear();
    }

    fn starts_with_word(&self, at: usize, word: &str) -> bool {
        let mut chars = self.chars.get(at..).unwrap_or_default().iter();
        word.chars().all(|w| chars.next() == Some(&w)) && !chars.next().is_some_and(|c| is_ident(*c))
    }

    fn skip_whitespace_from(&self, mut at: usize) -> usize {
        while self.chars.get(at).is_some_and(|c| c.is_whitespace()) {
            at += 1;
        }
        at
    }

    // ── Literals and comments ──────────────────────────────────────

    fn string_literal(&mut self) {
        if RAW_PREFIXES.contains(&last_word(&self.current)) {
            self.raw_string_literal();
        } else {
            self.quoted('"');
        }
    }

    fn char_literal(&mut self) {
        // `1'000'000`: a quote inside a numeric token is a digit separator.
        let token = self
            .current
            .rsplit(|c: char| !(is_ident(c) || c == '\''))
            .next()
            .unwrap_or_default();
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            self.take();
        } else {
            self.quoted('\'');
        }
    }

    fn quoted(&mut self, quote: char) {
        self.take();
        while let Some(ch) = self.take() {
            match ch {
                '\\' => {
                    self.take();
                }
                c if c == quote => break,
                _ => {}
            }
        }
    }

    fn raw_string_literal(&mut self) {
        self.take();
        let mut delimiter = String::new();
        while let Some(ch) = self.take() {
            if ch == '(' {
                break;
            }
            delimiter.push(ch);
        }
        let terminator = format!("){delimiter}\"");
        while self.take().is_some() {
            if self.current.ends_with(&terminator) {
                break;
            }
        }
    }

    fn line_comment(&mut self) {
        self.space();
        while self.peek(0).is_some_and(|c| c != '\n') {
            self.take();
        }
        self.flush();
    }

    fn block_comment(&mut self) {
        self.take();
        self.take();
        while let Some(ch) = self.take() {
            if ch == '*' && self.peek(0) == Some('/') {
                self.take();
                break;
            }
        }
    }

    fn directive(&mut self) {
        self.flush();
        while let Some(ch) = self.peek(0) {
            if ch == '\n' {
                break;
            }
            if ch == '\\' && self.peek(1) == Some('\n') {
                self.take();
            }
            self.take();
        }
        self.flush();
    }

    // ── Braces ─────────────────────────────────────────────────────

    /// Whether a `{` at the current position opens an indented block.
    fn opens_block(&self) -> bool {
        let prev = self.current.trim_end();
        if prev.is_empty() || prev.ends_with(')') || (prev.ends_with(':') && !prev.ends_with("::")) {
            return true;
        }
        let word = last_word(prev);
        if BLOCK_WORDS.contains(&word) {
            // `const`/`noexcept` only open a block after a parameter list.
            return matches!(word, "else" | "try" | "do") || prev.contains(')');
        }
        // Trailing return type: `[](int x) -> int {`.
        if prev
            .rfind(')')
            .is_some_and(|at| prev[at + 1..].trim_start().starts_with("->"))
        {
            return true;
        }
        let first = prev.split_whitespace().next().unwrap_or_default();
        TYPE_HEADS.contains(&first) && !prev.contains('=')
    }

    fn open_brace(&mut self) {
        if self.parens > 0 || self.inline_braces > 0 || !self.opens_block() {
            self.inline_braces += 1;
            self.take();
            return;
        }
        let is_do = last_word(self.current.trim_end()) == "do";
        self.space();
        self.take();
        self.flush();
        self.depth += 1;
        self.blocks.push(is_do);
    }

    fn close_brace(&mut self) {
        if self.inline_braces > 0 || self.parens > 0 {
            self.inline_braces = self.inline_braces.saturating_sub(1);
            self.take();
            return;
        }
        self.flush();
        self.depth = self.depth.saturating_sub(1);
        let opened_by_do = self.blocks.pop().unwrap_or(false);
        self.take();

        let next = self.skip_whitespace_from(self.pos);
        match self.chars.get(next) {
            Some(';' | ',' | ')') => self.pos = next,
            _ if self.starts_with_word(next, "else")
                || self.starts_with_word(next, "catch")
                || (opened_by_do && self.starts_with_word(next, "while")) =>
            {
                self.pos = next;
                self.current.push(' ');
            }
            _ => self.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn layout(body: &str) -> Vec<(usize, String)> {
        reflow(body)
            .into_iter()
            .map(|line| (line.depth, line.text))
            .collect()
    }

    fn owned(lines: &[(usize, &str)]) -> Vec<(usize, String)> {
        lines.iter().map(|(d, t)| (*d, (*t).to_string())).collect()
    }

    #[test]
    fn one_statement_per_line() {
        assert_eq!(
            layout("{ int a = 1;   a += 2;\n\n return a; }"),
            owned(&[(0, "{"), (1, "int a = 1;"), (1, "a += 2;"), (1, "return a;"), (0, "}")])
        );
    }

    #[test]
    fn else_stays_on_closing_line() {
        assert_eq!(
            layout("{\n  if (a) { x(); }\n  else { y(); }\n}"),
            owned(&[
                (0, "{"),
                (1, "if (a) {"),
                (2, "x();"),
                (1, "} else {"),
                (2, "y();"),
                (1, "}"),
                (0, "}"),
            ])
        );
    }

    #[test]
    fn for_header_keeps_its_semicolons() {
        assert_eq!(
            layout("{ for (int i = 0; i < n; ++i) { s += i; } }"),
            owned(&[
                (0, "{"),
                (1, "for (int i = 0; i < n; ++i) {"),
                (2, "s += i;"),
                (1, "}"),
                (0, "}"),
            ])
        );
    }

    #[test]
    fn literals_and_comments_are_preserved() {
        assert_eq!(
            layout("{ puts(\"a; { b }\"); // trailing ;\n  c = '}'; }"),
            owned(&[
                (0, "{"),
                (1, "puts(\"a; { b }\");"),
                (1, "// trailing ;"),
                (1, "c = '}';"),
                (0, "}"),
            ])
        );
    }

    #[test]
    fn brace_initializers_stay_inline() {
        assert_eq!(
            layout("{ Point p{1, 2};\n return {p.x, p.y}; }"),
            owned(&[(0, "{"), (1, "Point p{1, 2};"), (1, "return {p.x, p.y};"), (0, "}")])
        );
    }

    #[test]
    fn do_while_joins_closing_brace() {
        assert_eq!(
            layout("{ do { i++; } while (i < 3); }"),
            owned(&[
                (0, "{"),
                (1, "do {"),
                (2, "i++;"),
                (1, "} while (i < 3);"),
                (0, "}"),
            ])
        );
    }

    #[test]
    fn lambda_block_closes_with_semicolon() {
        assert_eq!(
            layout("{ auto f = [](int x) { return x; }; }"),
            owned(&[
                (0, "{"),
                (1, "auto f = [](int x) {"),
                (2, "return x;"),
                (1, "};"),
                (0, "}"),
            ])
        );
    }

    #[test]
    fn digit_separators_are_not_char_literals() {
        assert_eq!(
            layout("{ long n = 1'000'000; }"),
            owned(&[(0, "{"), (1, "long n = 1'000'000;"), (0, "}")])
        );
    }

    #[test]
    fn raw_strings_are_verbatim() {
        assert_eq!(
            layout("{ s = R\"x(a; } b)x\"; }"),
            owned(&[(0, "{"), (1, "s = R\"x(a; } b)x\";"), (0, "}")])
        );
    }

    #[test]
    fn empty_body_is_two_lines() {
        assert_eq!(layout("{}"), owned(&[(0, "{"), (0, "}")]));
    }
}
