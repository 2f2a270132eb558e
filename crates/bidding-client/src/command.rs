//! Parsing of typed commands into user intents.

use bidding_core::{BidRequest, BidRequestError, Seat, Strain, TrainingMode, BIDDING_SYSTEMS};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown strain '{0}' (use c, d, h, s or nt)")]
    UnknownStrain(String),

    #[error("Unknown training mode '{0}' (use single or multi)")]
    UnknownMode(String),

    #[error("No bidding system number {0}")]
    UnknownSystem(usize),

    #[error("Unknown hand '{0}' (use a seat or 0-3)")]
    UnknownHand(String),

    #[error(transparent)]
    InvalidBid(#[from] BidRequestError),
}

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bid(BidRequest),
    NewDeal,
    SetSystem(String),
    SetMode(TrainingMode),
    ShowGame,
    ShowPastDeals,
    Retry,
    Advice(usize),
    ShowHands,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        let Some((word, rest)) = split_word(line) else {
            return Ok(None);
        };
        let rest = rest.trim();

        let command = match word.to_ascii_lowercase().as_str() {
            "bid" | "b" => Command::Bid(parse_contract(rest)?),
            "pass" | "p" => Command::Bid(BidRequest::pass()),
            "double" | "dbl" | "x" => Command::Bid(BidRequest::double()),
            "redouble" | "rdbl" | "xx" => Command::Bid(BidRequest::redouble()),
            "new" | "deal" => Command::NewDeal,
            "system" => Command::SetSystem(parse_system(rest)?),
            "mode" => match TrainingMode::parse(rest) {
                Some(mode) => Command::SetMode(mode),
                None if rest.is_empty() => return Err(CommandError::Usage("mode single|multi")),
                None => return Err(CommandError::UnknownMode(rest.to_string())),
            },
            "game" => Command::ShowGame,
            "deals" | "history" => Command::ShowPastDeals,
            "retry" | "r" => Command::Retry,
            "advice" => Command::Advice(parse_hand_index(rest)?),
            "hands" => Command::ShowHands,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            // Shorthand contract bids such as "1h" or "3nt"
            other if other.starts_with(|c: char| c.is_ascii_digit()) => {
                Command::Bid(parse_contract(line)?)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  bid <level> <strain>   make a contract bid (also: 1h, 3nt)
  pass | double | redouble
  new                    start a new deal
  system <name|number>   change bidding system
  mode single|multi      change training mode
  game | deals           switch between current game and past deals
  advice <seat|0-3>      ask the server for advice on a hand
  hands                  show all four hands
  retry                  reload after an error
  help | quit";

fn split_word(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], &line[pos..]),
        None => (line, ""),
    })
}

/// "1 h", "1h", "3 nt", "7NT"
fn parse_contract(input: &str) -> Result<BidRequest, CommandError> {
    const USAGE: &str = "bid <level 1-7> <c|d|h|s|nt>";

    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || digits == compact.len() {
        return Err(CommandError::Usage(USAGE));
    }

    let level: u8 = compact[..digits]
        .parse()
        .map_err(|_| CommandError::Usage(USAGE))?;
    let strain_text = &compact[digits..];
    let strain = Strain::parse(strain_text)
        .ok_or_else(|| CommandError::UnknownStrain(strain_text.to_string()))?;

    Ok(BidRequest::contract(level, strain)?)
}

/// A system by its number in the menu, or by name
fn parse_system(input: &str) -> Result<String, CommandError> {
    if input.is_empty() {
        return Err(CommandError::Usage("system <name|number>"));
    }
    if let Ok(n) = input.parse::<usize>() {
        return match n.checked_sub(1).and_then(|i| BIDDING_SYSTEMS.get(i)) {
            Some(system) => Ok(system.to_string()),
            None => Err(CommandError::UnknownSystem(n)),
        };
    }
    let known = BIDDING_SYSTEMS
        .iter()
        .find(|s| s.eq_ignore_ascii_case(input));
    Ok(known.map(|s| s.to_string()).unwrap_or_else(|| input.to_string()))
}

fn parse_hand_index(input: &str) -> Result<usize, CommandError> {
    if input.is_empty() {
        return Err(CommandError::Usage("advice <seat|0-3>"));
    }
    if let Some(seat) = Seat::parse(input) {
        return Ok(seat.index());
    }
    match input.parse::<usize>() {
        Ok(i) if i < 4 => Ok(i),
        _ => Err(CommandError::UnknownHand(input.to_string())),
    }
}
