//! Line-oriented console commands.

use std::str::FromStr;

use parley_observe::{EventDomain, ObserveError};
use parley_types::{ClipDuration, DurationParseError, FileMeta, RecordingId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid call duration: {0}")]
    Duration(#[from] DurationParseError),

    #[error("invalid recording id: {0}")]
    RecordingId(#[from] uuid::Error),

    #[error(transparent)]
    Observe(#[from] ObserveError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `upload <name>...`
    Upload(Vec<FileMeta>),
    /// `call <M:SS> [title...]`
    Call {
        duration: ClipDuration,
        title: Option<String>,
    },
    /// `remove <id>`
    Remove(RecordingId),
    Status,
    /// `events [DOMAIN]`
    Events(Option<EventDomain>),
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        match name {
            "upload" => {
                let files: Vec<FileMeta> = words.map(FileMeta::new).collect();
                if files.is_empty() {
                    return Err(CommandError::MissingArgument("upload"));
                }
                Ok(Self::Upload(files))
            }
            "call" => {
                let duration = words
                    .next()
                    .ok_or(CommandError::MissingArgument("call"))?
                    .parse()?;
                let title = words.collect::<Vec<_>>().join(" ");
                Ok(Self::Call {
                    duration,
                    title: (!title.is_empty()).then_some(title),
                })
            }
            "remove" => {
                let id = words
                    .next()
                    .ok_or(CommandError::MissingArgument("remove"))?
                    .parse()?;
                Ok(Self::Remove(id))
            }
            "status" => Ok(Self::Status),
            "events" => match words.next() {
                Some(label) => {
                    let domain = label.parse::<EventDomain>().map_err(ObserveError::from)?;
                    Ok(Self::Events(Some(domain)))
                }
                None => Ok(Self::Events(None)),
            },
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upload_with_names() {
        let cmd: Command = "upload a.wav  b.mp3".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Upload(vec![FileMeta::new("a.wav"), FileMeta::new("b.mp3")])
        );
    }

    #[test]
    fn upload_without_files_is_rejected() {
        let err = "upload".parse::<Command>().unwrap_err();
        assert!(matches!(err, CommandError::MissingArgument("upload")));
    }

    #[test]
    fn parses_call_with_optional_title() {
        let cmd: Command = "call 5:00 Возражения по цене".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Call {
                duration: ClipDuration::new(5, 0).unwrap(),
                title: Some("Возражения по цене".to_string()),
            }
        );

        let cmd: Command = "call 0:45".parse().unwrap();
        assert!(matches!(cmd, Command::Call { title: None, .. }));
    }

    #[test]
    fn bad_call_duration_is_reported() {
        let err = "call 1:75".parse::<Command>().unwrap_err();
        assert!(matches!(
            err,
            CommandError::Duration(DurationParseError::SecondsOutOfRange(75))
        ));
    }

    #[test]
    fn remove_needs_a_uuid() {
        let id = RecordingId::new();
        let cmd: Command = format!("remove {id}").parse().unwrap();
        assert_eq!(cmd, Command::Remove(id));

        let err = "remove 42".parse::<Command>().unwrap_err();
        assert!(matches!(err, CommandError::RecordingId(_)));
    }

    #[test]
    fn events_accepts_a_domain() {
        assert_eq!(
            "events".parse::<Command>().unwrap(),
            Command::Events(None)
        );
        assert_eq!(
            "events RECORDING".parse::<Command>().unwrap(),
            Command::Events(Some(EventDomain::Recording))
        );
        assert!(matches!(
            "events BILLING".parse::<Command>().unwrap_err(),
            CommandError::Observe(ObserveError::UnknownDomain(_))
        ));
    }

    #[test]
    fn unknown_and_empty_lines() {
        assert!(matches!(
            "dance".parse::<Command>().unwrap_err(),
            CommandError::Unknown(name) if name == "dance"
        ));
        assert!(matches!(
            "   ".parse::<Command>().unwrap_err(),
            CommandError::Empty
        ));
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
    }
}
