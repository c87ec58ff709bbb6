// ----------------------------------------------------------------------------
// Line

/// One source line, with the comment stripped and the remainder classified.
#[derive(Debug, Clone)]
pub struct Line {
    file: String,
    idx: usize,
    raw: String,
    pub stmt: Option<Stmt>,
}

impl Line {
    pub fn parse(file: &str, idx: usize, raw: &str) -> Self {
        let code = match raw.split_once("//") {
            Some((code, _comment)) => code,
            None => raw,
        }
        .trim();
        let stmt = if code.is_empty() {
            None
        } else {
            Some(Stmt::parse(code))
        };
        Line {
            file: file.to_string(),
            idx,
            raw: raw.to_string(),
            stmt,
        }
    }

    pub fn pos(&self) -> String {
        format!("{}:{}", self.file, self.idx + 1)
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Reads the whole source into a line buffer; both passes iterate it.
pub fn parse_lines(file: &str, source: &str) -> Vec<Line> {
    source
        .lines()
        .enumerate()
        .map(|(idx, raw)| Line::parse(file, idx, raw))
        .collect()
}

// ----------------------------------------------------------------------------
// Statement

/// A classified instruction. Classification looks only at the leading
/// character; mnemonics and operands are validated later, while encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `@value`: the operand is a decimal literal or a symbol name.
    A(String),
    /// `dest=comp;jump` with `dest` and `jump` optional.
    C {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
    },
    /// `(name)`: binds `name` to the next instruction address. Emits nothing.
    Label(String),
}

impl Stmt {
    pub fn parse(code: &str) -> Stmt {
        if let Some(operand) = code.strip_prefix('@') {
            return Stmt::A(operand.to_string());
        }
        if code.starts_with('(') {
            // every paren is stripped, not just the delimiting pair
            return Stmt::Label(code.replace(['(', ')'], ""));
        }
        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Some(dest.to_string()), rest),
            None => (None, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp.to_string(), Some(jump.to_string())),
            None => (rest.to_string(), None),
        };
        Stmt::C { dest, comp, jump }
    }
}
