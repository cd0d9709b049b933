use std::io::{self, Write};

/// Writes help and report text to stdout. A closed pipe counts as success
/// so `moneymate ... | head` exits cleanly instead of panicking.
pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    tolerate_broken_pipe(stdout.write_all(text.as_bytes()))?;
    tolerate_broken_pipe(stdout.flush())
}

fn tolerate_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::tolerate_broken_pipe;

    #[test]
    fn broken_pipe_is_swallowed_and_other_errors_pass_through() {
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        assert!(tolerate_broken_pipe(Err(broken)).is_ok());

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "no");
        assert!(tolerate_broken_pipe(Err(denied)).is_err());

        assert!(tolerate_broken_pipe(Ok(())).is_ok());
    }
}
