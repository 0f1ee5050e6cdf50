//! One-line text commands
//!
//! The grammar is a verb followed by whitespace-separated arguments:
//!
//! ```text
//! gen 20            values 5,3,8,1      algo merge        sort [quick]
//! speed 7           addhead 4           addtail 4         insertat 4 2
//! removehead        removetail          search 4          push 1
//! pop               peek                enqueue 1         dequeue
//! front             rear                insert 5          delete 5
//! traverse level    clear stack
//! ```
//!
//! Verbs are case-insensitive. `values` takes the rest of the line verbatim.

use crate::algorithms::{SortAlgorithm, Traversal};
use crate::constants::{MAX_SPEED, MIN_SPEED};
use crate::errors::{Structure, VisualError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate(usize),
    Values(String),
    Algorithm(SortAlgorithm),
    Sort(Option<SortAlgorithm>),
    Speed(u8),
    AddHead(i32),
    AddTail(i32),
    InsertAt { value: i32, index: usize },
    RemoveHead,
    RemoveTail,
    Search(i32),
    Push(i32),
    Pop,
    Peek,
    Enqueue(i32),
    Dequeue,
    Front,
    Rear,
    Insert(i32),
    Delete(i32),
    Traverse(Traversal),
    Clear(Structure),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, VisualError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        if verb.is_empty() {
            return Err(VisualError::invalid("empty command"));
        }

        let mut args = Args::new(verb, rest);
        let command = match verb.to_ascii_lowercase().as_str() {
            "gen" | "generate" => Command::Generate(args.index("size")?),
            "values" | "custom" => {
                if rest.is_empty() {
                    return Err(VisualError::invalid("values needs a comma-separated list"));
                }
                return Ok(Command::Values(rest.to_string()));
            }
            "algo" | "algorithm" => Command::Algorithm(args.word("algorithm")?.parse()?),
            "sort" | "start" => Command::Sort(
                args.optional_word()
                    .map(str::parse::<SortAlgorithm>)
                    .transpose()?,
            ),
            "speed" => Command::Speed(args.speed()?),
            "addhead" => Command::AddHead(args.value()?),
            "addtail" => Command::AddTail(args.value()?),
            "insertat" => {
                let value = args.value()?;
                let index = args.index("index")?;
                Command::InsertAt { value, index }
            }
            "removehead" => Command::RemoveHead,
            "removetail" => Command::RemoveTail,
            "search" | "find" => Command::Search(args.value()?),
            "push" => Command::Push(args.value()?),
            "pop" => Command::Pop,
            "peek" | "top" => Command::Peek,
            "enqueue" => Command::Enqueue(args.value()?),
            "dequeue" => Command::Dequeue,
            "front" => Command::Front,
            "rear" => Command::Rear,
            "insert" => Command::Insert(args.value()?),
            "delete" => Command::Delete(args.value()?),
            "traverse" => Command::Traverse(args.word("traversal")?.parse()?),
            "clear" => Command::Clear(parse_structure(args.word("structure")?)?),
            other => return Err(VisualError::invalid(format!("unknown command '{}'", other))),
        };

        args.finish()?;
        Ok(command)
    }
}

fn parse_structure(word: &str) -> Result<Structure, VisualError> {
    match word.to_ascii_lowercase().as_str() {
        "list" => Ok(Structure::List),
        "stack" => Ok(Structure::Stack),
        "queue" => Ok(Structure::Queue),
        "tree" | "bst" => Ok(Structure::Tree),
        other => Err(VisualError::invalid(format!(
            "cannot clear '{}' (expected list, stack, queue or tree)",
            other
        ))),
    }
}

/// Cursor over the arguments of one command
struct Args<'a> {
    verb: &'a str,
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn new(verb: &'a str, rest: &'a str) -> Self {
        Args {
            verb,
            tokens: rest.split_whitespace(),
        }
    }

    fn word(&mut self, what: &str) -> Result<&'a str, VisualError> {
        self.tokens
            .next()
            .ok_or_else(|| VisualError::invalid(format!("{} needs a {}", self.verb, what)))
    }

    fn optional_word(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    fn value(&mut self) -> Result<i32, VisualError> {
        let token = self.word("value")?;
        token
            .parse()
            .map_err(|_| VisualError::invalid(format!("'{}' is not a valid number", token)))
    }

    fn index(&mut self, what: &str) -> Result<usize, VisualError> {
        let token = self.word(what)?;
        token.parse().map_err(|_| {
            VisualError::invalid(format!("'{}' is not a valid {}", token, what))
        })
    }

    fn speed(&mut self) -> Result<u8, VisualError> {
        let token = self.word("speed")?;
        match token.parse::<u8>() {
            Ok(speed) if (MIN_SPEED..=MAX_SPEED).contains(&speed) => Ok(speed),
            _ => Err(VisualError::invalid(format!(
                "speed must be between {} and {}",
                MIN_SPEED, MAX_SPEED
            ))),
        }
    }

    fn finish(mut self) -> Result<(), VisualError> {
        match self.tokens.next() {
            Some(extra) => Err(VisualError::invalid(format!(
                "unexpected argument '{}' for {}",
                extra, self.verb
            ))),
            None => Ok(()),
        }
    }
}
