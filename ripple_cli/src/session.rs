//! Interactive form session
//!
//! Reads one command per line and drives a [`MeasurementForm`]. When the
//! form asks for confirmation the next line must answer it (y/n).

use std::io::{self, BufRead, Write};
use std::time::Instant;

use ripple_core::{Decision, FormError, Industry, MeasurementForm, Outcome, Scope};

use crate::report;

const HELP: &str = "\
Commands:
  industry <apparel|solar|plastics>   select the industry
  scope <1|2|3>                       toggle a scope
  set <key> <value>                   enter a field value
  show                                print visible fields and values
  save                                save the form
  reset                               clear everything
  help                                show this list
  quit                                leave";

enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    form: MeasurementForm,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(form: MeasurementForm, input: R, out: W) -> Self {
        Session { form, input, out }
    }

    pub fn form(&self) -> &MeasurementForm {
        &self.form
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Carbon Ripples - Calculation Suite")?;
        writeln!(self.out, "Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            self.form.tick(Instant::now());
            match self.form.pending() {
                Some(confirmation) => write!(self.out, "{} [y/n] ", confirmation.prompt())?,
                None => write!(self.out, "> ")?,
            }
            self.out.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if let Flow::Quit = self.handle(line.trim())? {
                break;
            }
        }
        Ok(())
    }

    fn handle(&mut self, line: &str) -> io::Result<Flow> {
        if self.form.pending().is_some() {
            return self.answer(line).map(|_| Flow::Continue);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let result = match command {
            "" => Ok(None),
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => Ok(Some(HELP.to_string())),
            "industry" => self.select_industry(rest),
            "scope" => self.toggle_scope(rest),
            "set" => self.set(rest).map(|()| None),
            "show" => {
                self.show()?;
                Ok(None)
            }
            "save" => self.save(),
            "reset" => self.form.request_reset().map(note),
            other => Ok(Some(format!("Unknown command '{}'. Type 'help'.", other))),
        };

        match result {
            Ok(Some(message)) => writeln!(self.out, "{}", message)?,
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(code = e.error_code(), "command rejected");
                writeln!(self.out, "Error: {}", e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn answer(&mut self, line: &str) -> io::Result<()> {
        let decision = match line.to_lowercase().as_str() {
            "y" | "yes" => Decision::Accept,
            "n" | "no" => Decision::Decline,
            _ => {
                writeln!(self.out, "Please answer y or n.")?;
                return Ok(());
            }
        };
        match self.form.resolve(decision) {
            Ok(Outcome::Declined) => writeln!(self.out, "Cancelled.")?,
            Ok(_) => writeln!(self.out, "Done.")?,
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn select_industry(&mut self, name: &str) -> Result<Option<String>, FormError> {
        let industry = Industry::from_str_flexible(name)?;
        self.form.select_industry(industry).map(note)
    }

    fn toggle_scope(&mut self, name: &str) -> Result<Option<String>, FormError> {
        let scope = Scope::from_str_flexible(name)?;
        self.form.toggle_scope(scope)?;
        Ok(Some(format!("Scopes: {}", self.form.scopes())))
    }

    fn set(&mut self, args: &str) -> Result<(), FormError> {
        let (key, value) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
        self.form.set(key, value.trim())
    }

    fn save(&mut self) -> Result<Option<String>, FormError> {
        self.form.save(Instant::now())?;
        Ok(self.form.notification().map(|n| n.message.clone()))
    }

    fn show(&mut self) -> io::Result<()> {
        let industry = self
            .form
            .industry()
            .map_or("(none)".to_string(), |i| i.to_string());
        writeln!(self.out, "Industry: {}", industry)?;
        writeln!(self.out, "Scopes: {}", self.form.scopes())?;
        writeln!(self.out)?;
        report::print_layout(&mut self.out, &self.form.layout(), Some(self.form.data()))
    }
}

/// Outcomes that need no prompt are reported right away
fn note(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Unchanged => Some("Nothing changed.".to_string()),
        Outcome::Declined => Some("Cancelled.".to_string()),
        Outcome::Applied | Outcome::ConfirmationRequired(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::fields::CommonInput;
    use ripple_core::Field;
    use std::io::Cursor;

    fn run(script: &str) -> (MeasurementForm, String) {
        let mut out = Vec::new();
        let mut session = Session::new(MeasurementForm::default(), Cursor::new(script), &mut out);
        session.run().unwrap();
        let form = session.form().clone();
        drop(session);
        (form, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_save_prints_success() {
        let (form, out) = run("set electricity 1200\nsave\nquit\n");
        assert!(out.contains("Your emissions data has been successfully saved."));
        assert_eq!(
            form.data().value(Field::Common(CommonInput::Electricity)),
            Some("1200")
        );
    }

    #[test]
    fn test_declined_industry_change() {
        let (form, out) = run("industry apparel\nset fiberType cotton\nindustry plastics\nn\n");
        assert!(out.contains("Changing industry will reset all industry-specific data. Proceed? [y/n]"));
        assert!(out.contains("Cancelled."));
        assert_eq!(form.industry(), Some(Industry::Apparel));
        assert!(!form.data().is_empty());
    }

    #[test]
    fn test_reset_requires_yes() {
        let (form, out) = run("industry solar\nscope 2\nreset\nmaybe\ny\n");
        assert!(out.contains("Please answer y or n."));
        assert_eq!(form.industry(), None);
        assert_eq!(form.scopes().len(), 3);
    }

    #[test]
    fn test_errors_are_reported_and_session_continues() {
        let (form, out) = run("set resinType PET\nscope 9\nbogus\nindustry plastics\nset resinType pet\n");
        assert!(out.contains("Error:"));
        assert!(out.contains("Unknown command 'bogus'"));
        assert_eq!(form.data().value(Field::ResinType), Some("PET"));
    }

    #[test]
    fn test_show_lists_values() {
        let (_, out) = run("scope 1\nscope 2\nscope 3\nshow\n");
        assert!(out.contains("Scopes: (none)"));
        assert!(out.contains("Warning: At least one emission scope must be selected to proceed."));
        assert!(out.contains("electricity"));
    }

    #[test]
    fn test_hidden_field_edit_is_rejected() {
        let (form, out) = run("scope 1\nset fuelCombustion 40\nquit\n");
        assert!(out.contains("Error: Field 'fuelCombustion' is hidden while Scope 1 is not selected"));
        assert!(form.data().is_empty());
    }

    /// Fails every write that starts with `prefix`
    struct FailingWriter {
        prefix: &'static str,
        written: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.starts_with(self.prefix.as_bytes()) {
                return Err(io::Error::other("stdout closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_end_the_session() {
        for (script, prefix) in [
            ("scope 2\n", "Scopes"),
            ("save\n", "Your emissions data"),
            ("industry solar\nindustry solar\n", "Nothing changed"),
        ] {
            let mut out = FailingWriter {
                prefix,
                written: Vec::new(),
            };
            let mut session = Session::new(MeasurementForm::default(), Cursor::new(script), &mut out);
            let err = session.run().unwrap_err();
            assert_eq!(err.to_string(), "stdout closed", "script {:?}", script);
        }
    }
}
