use std::io::{self, Write};

/// Output sink the handler writes reports to.
pub trait Console {
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

impl Console for io::Stderr {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stderr = self.lock();
        writeln!(stderr, "{}", text)?;
        stderr.flush()
    }
}

impl Console for io::Stdout {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = self.lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }
}

impl Console for Vec<u8> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self, "{}", text)
    }
}

impl Console for String {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        self.push('\n');
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }
}
