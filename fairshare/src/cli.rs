use std::borrow::Cow;

pub const USAGE: &str = "Usage: fairshare <url-or-query>\n       fairshare <salary1> <salary2> <expense>...\n       fairshare --saved <expense>...\nAdd --share to print and copy a share link.";

#[derive(Debug, PartialEq, Eq)]
pub enum InputSource {
    /// A full share URL or a bare query string to restore.
    SharedState(String),
    Direct {
        salary_a: String,
        salary_b: String,
        expenses: Vec<String>,
    },
    /// Expenses against the salaries persisted by a previous run.
    Saved { expenses: Vec<String> },
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub source: InputSource,
    pub share: bool,
}

impl Invocation {
    pub fn parse(args: impl Iterator<Item = String>) -> Result<Self, Cow<'static, str>> {
        let mut share = false;
        let mut saved = false;
        let mut positional: Vec<String> = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--share" => share = true,
                "--saved" => saved = true,
                _ if arg.starts_with("--") => {
                    return Err(format!("Unknown flag '{arg}'\n{USAGE}").into());
                }
                _ => positional.push(arg),
            }
        }

        let source = if saved {
            if positional.is_empty() {
                return Err(USAGE.into());
            }
            InputSource::Saved {
                expenses: positional,
            }
        } else if positional.len() == 1 && positional[0].contains('=') {
            InputSource::SharedState(positional.swap_remove(0))
        } else if positional.len() >= 3 {
            let mut args = positional.into_iter();
            let salary_a = args.next().unwrap_or_default();
            let salary_b = args.next().unwrap_or_default();
            InputSource::Direct {
                salary_a,
                salary_b,
                expenses: args.collect(),
            }
        } else {
            return Err(USAGE.into());
        };

        Ok(Self { source, share })
    }
}
