//! Prompt-driven calculator loop.

use crate::report::{PrintOptions, write_report};
use mn_core::numeric::DISPATCH_ZERO;
use mn_network::schematic::SEPARATOR;
use mn_network::{MatchError, MatchRequest, solve};
use std::io::{self, BufRead, Write};
use tracing::debug;

const CONTINUE_PROMPT: &str = "Enter z to close or press Enter to continue.";

const LEGEND: &str = "\
Symbols used in the program:
Load resistance:        RL
Load reactance:         XL
Load complex impedance: ZL = RL + j*XL
Nominal impedance:      Z0
Operating frequency:    f
";

enum Step<T> {
    Value(T),
    /// Input rejected; the user chose whether to go on.
    Rejected,
    /// Input closed or the user typed `z`.
    Quit,
}

struct Session<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Show the continue prompt; `true` means keep going.
    fn ask_continue(&mut self) -> io::Result<bool> {
        writeln!(self.out, "{CONTINUE_PROMPT}")?;
        self.out.flush()?;
        Ok(!matches!(self.read_line()?.as_deref(), None | Some("z")))
    }

    fn reject(&mut self, message: &str) -> io::Result<Step<f64>> {
        writeln!(self.out, "{message}")?;
        Ok(if self.ask_continue()? {
            Step::Rejected
        } else {
            Step::Quit
        })
    }

    fn prompt_number(&mut self, prompt: &str) -> io::Result<Step<f64>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(Step::Quit);
        };
        match line.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Step::Value(v)),
            _ => self.reject("Wrong input."),
        }
    }

    fn read_inputs(&mut self) -> io::Result<Step<MatchRequest>> {
        macro_rules! take {
            ($step:expr) => {
                match $step? {
                    Step::Value(v) => v,
                    Step::Rejected => return Ok(Step::Rejected),
                    Step::Quit => return Ok(Step::Quit),
                }
            };
        }

        writeln!(self.out, "Enter input data.")?;
        let rl = take!(self.prompt_number("RL[ohm] = "));
        let xl = take!(self.prompt_number("XL[ohm] = "));
        let z0 = take!(self.prompt_number("Z0[ohm] = "));
        if z0 <= DISPATCH_ZERO {
            take!(self.reject("Nominal impedance must be positive."));
        }
        if rl / z0 <= DISPATCH_ZERO {
            take!(self.reject("Load resistance must be positive."));
        }
        let f = take!(self.prompt_number(" f[Hz]  = "));
        if f <= DISPATCH_ZERO {
            take!(self.reject("Operating frequency must be positive."));
        }
        Ok(Step::Value(MatchRequest::from_si(rl, xl, z0, f)))
    }

    fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "{LEGEND}")?;
        loop {
            let request = match self.read_inputs()? {
                Step::Value(request) => request,
                Step::Rejected => continue,
                Step::Quit => return Ok(()),
            };
            writeln!(self.out, "\n{SEPARATOR}")?;
            match solve(&request) {
                Ok(report) => write_report(&mut *self.out, &report, PrintOptions::default())?,
                Err(e @ MatchError::InvalidInput { .. }) => {
                    debug!(error = %e, "rejected input");
                    writeln!(self.out, "{e}")?;
                }
                Err(e) => return Err(io::Error::other(e)),
            }
            if !self.ask_continue()? {
                return Ok(());
            }
        }
    }
}

/// Prompt for loads until the user types `z` or input ends.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    Session { input, out }.run()
}
