use fairshare_application::{ClipboardError, ClipboardWriter};
use std::{
    io::{self, Write},
    process::{Command, Stdio},
};

/// Candidate commands in probe order; the first one that spawns wins.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("pbcopy", &[]),
];

/// Writes to the system clipboard by piping through whichever clipboard
/// command the platform provides.
pub struct CommandClipboard;

impl ClipboardWriter for CommandClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        for (command, args) in CLIPBOARD_COMMANDS {
            let spawned = Command::new(command)
                .args(*args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match spawned {
                Ok(mut child) => {
                    if let Some(mut stdin) = child.stdin.take() {
                        stdin.write_all(text.as_bytes())?;
                    }
                    let status = child.wait()?;
                    return if status.success() {
                        Ok(())
                    } else {
                        Err(ClipboardError::CommandFailed(format!(
                            "{command} exited with {status}"
                        )))
                    };
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(ClipboardError::Io(err)),
            }
        }

        Err(ClipboardError::CommandUnavailable)
    }
}
