use std::io::{BufRead, Write};

use arch::op::{Op, Param};
use arch::token::{self, Token};
use color_print::ceprintln;

use crate::encode;
use crate::error::{Diag, Error};
use crate::label::Labels;
use crate::parser::{self, Stmt};

/// One assembly run: owns the label allocator and the collected
/// diagnostics. Malformed lines are recorded and skipped; the run only
/// aborts on an I/O failure.
pub struct Assembler {
    labels: Labels,
    diags: Vec<Diag>,
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            labels: Labels::new(),
            diags: Vec::new(),
        }
    }

    /// Single pass over `input`, emitting tokens to `out` line by line.
    /// `source` names the input in diagnostics. With `dump` on, each line
    /// is also listed to stderr in readable form.
    pub fn assemble(
        &mut self,
        source: &str,
        input: impl BufRead,
        mut out: impl Write,
        dump: bool,
    ) -> Result<(), Error> {
        for (idx, raw) in input.lines().enumerate() {
            let raw = raw.map_err(Error::FileRead)?;
            match self.assemble_line(&raw) {
                Ok(Some(tokens)) => {
                    out.write_all(token::to_text(&tokens).as_bytes())
                        .map_err(Error::FileWrite)?;
                    if dump {
                        ceprintln!(
                            "<blue>{:>4} |</> {:<24} <cyan>{}</>",
                            idx + 1,
                            raw.trim(),
                            token::glyphs(&tokens)
                        );
                    }
                }
                Ok(None) => {
                    if dump {
                        ceprintln!("<blue>{:>4} |</> {}", idx + 1, raw.trim());
                    }
                }
                Err(error) => {
                    if dump {
                        ceprintln!("<blue>{:>4} |</> {:<24} <red,bold>!</>", idx + 1, raw.trim());
                    }
                    self.diags.push(Diag::new(source, idx + 1, error));
                }
            }
        }
        if dump && !self.labels.is_empty() {
            ceprintln!("<blue>-----+</> labels");
            for (name, seq) in self.labels.iter() {
                ceprintln!("     <blue>|</> {:<24} <cyan>{}</>", name, token::glyphs(seq));
            }
        }
        Ok(())
    }

    fn assemble_line(&mut self, raw: &str) -> Result<Option<Vec<Token>>, Error> {
        let stmt = match parser::classify(raw)? {
            Some(stmt) => stmt,
            None => return Ok(None),
        };
        let (op, param) = match stmt {
            // `name:` desugars to the LABEL resolution path
            Stmt::Label(name) => (Op::LABEL, Some(name)),
            Stmt::Code(mnemonic, param) => match Op::parse(&mnemonic) {
                Some(op) => (op, param),
                None => return Err(Error::UnrecognizedInstruction(mnemonic)),
            },
        };

        let mut tokens = op.tokens().to_vec();
        match op.param() {
            Param::Number => {
                let word = param.unwrap_or_default();
                let num: i64 = word.parse().map_err(|_| Error::UnparsableNumber(word))?;
                tokens.extend(encode::number(num));
            }
            Param::Label => {
                let name = match param {
                    Some(name) => name,
                    None => return Err(Error::UnparsableLine(raw.trim().to_string())),
                };
                tokens.extend_from_slice(self.labels.resolve(&name));
            }
            Param::None => {
                if let Some(word) = param {
                    return Err(Error::UnexpectedParameter(word, op));
                }
            }
        }
        Ok(Some(tokens))
    }

    pub fn diags(&self) -> &[Diag] {
        &self.diags
    }

    /// True iff the run recorded no diagnostics.
    pub fn success(&self) -> bool {
        self.diags.is_empty()
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}
