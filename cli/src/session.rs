//! Line-oriented shopping list session.
//!
//! Reads commands from `input`, applies them to a [`ShoppingList`], and
//! prints the list after every change. Amount prompts read from the same
//! input; end of input counts as cancel.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use shopping_core::{AmountPrompt, ShoppingItem, ShoppingList, Transport};

pub const HELP: &str = "\
commands:
  ls            show the list
  add <name>    add an item
  toggle <n>    check or uncheck item n
  amount <n>    set the amount of item n
  rm <n>        remove item n
  help          show this text
  quit          leave";

/// Unit printed after amounts and the total.
pub const CURRENCY: &str = "Ft";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Toggle(usize),
    Amount(usize),
    Remove(usize),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let position = || {
            rest.parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("{word}: expected an item number, got {rest:?}"))
        };
        match word {
            "" | "ls" | "list" => Ok(Command::List),
            "add" => Ok(Command::Add(rest.to_string())),
            "toggle" | "check" => position().map(Command::Toggle),
            "amount" | "edit" => position().map(Command::Amount),
            "rm" | "remove" | "delete" => position().map(Command::Remove),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command {other:?}, try help")),
        }
    }
}

/// Prompts by writing the message to `output` and reading one line.
pub struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LinePrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> AmountPrompt for LinePrompt<'_, R, W> {
    fn ask(&mut self, message: &str, current: Option<f64>) -> Option<String> {
        let shown = match current {
            Some(amount) => write!(self.output, "{message} [{amount}] "),
            None => write!(self.output, "{message} "),
        };
        if shown.and_then(|_| self.output.flush()).is_err() {
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

pub fn render_item(position: usize, item: &ShoppingItem) -> String {
    let mark = if item.checked { 'x' } else { ' ' };
    match item.amount {
        Some(amount) => format!("{position:>3}. [{mark}] {}  {amount} {CURRENCY}", item.name),
        None => format!("{position:>3}. [{mark}] {}", item.name),
    }
}

pub fn render(list: &ShoppingList) -> String {
    let mut out = String::new();
    if list.items().is_empty() {
        out.push_str("  (empty)\n");
    }
    for (index, item) in list.items().iter().enumerate() {
        out.push_str(&render_item(index + 1, item));
        out.push('\n');
    }
    out.push_str(&format!("Total: {} {CURRENCY}\n", list.total_amount()));
    out
}

/// Id of the item shown at 1-based `position`.
fn item_id(list: &ShoppingList, position: usize) -> Option<String> {
    list.items().get(position.checked_sub(1)?).map(|item| item.id.clone())
}

/// Run commands until `quit` or end of input.
pub fn run<R: BufRead, W: Write, T: Transport>(
    list: &mut ShoppingList,
    transport: &mut T,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    list.load(transport);
    write!(output, "{}", render(list))?;

    loop {
        write!(output, "> ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => return Ok(()),
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::List => {}
            Command::Add(name) => {
                list.set_draft(name);
                list.add(transport);
            }
            Command::Toggle(n) => match item_id(list, n) {
                Some(id) => list.toggle(&id, transport, &mut LinePrompt::new(input, output)),
                None => {
                    writeln!(output, "no item {n}")?;
                    continue;
                }
            },
            Command::Amount(n) => match item_id(list, n) {
                Some(id) => list.edit_amount(&id, transport, &mut LinePrompt::new(input, output)),
                None => {
                    writeln!(output, "no item {n}")?;
                    continue;
                }
            },
            Command::Remove(n) => match item_id(list, n) {
                Some(id) => list.remove(&id, transport),
                None => {
                    writeln!(output, "no item {n}")?;
                    continue;
                }
            },
        }
        write!(output, "{}", render(list))?;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use shopping_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, ShoppingClient};

    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("ls".parse::<Command>(), Ok(Command::List));
        assert_eq!("".parse::<Command>(), Ok(Command::List));
        assert_eq!("add  Oat milk ".parse::<Command>(), Ok(Command::Add("Oat milk".to_string())));
        assert_eq!("toggle 2".parse::<Command>(), Ok(Command::Toggle(2)));
        assert_eq!("amount 1".parse::<Command>(), Ok(Command::Amount(1)));
        assert_eq!("rm 3".parse::<Command>(), Ok(Command::Remove(3)));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_positions_and_unknown_words() {
        assert!("toggle".parse::<Command>().is_err());
        assert!("toggle 0".parse::<Command>().is_err());
        assert!("rm two".parse::<Command>().is_err());
        assert!("buy milk".parse::<Command>().is_err());
    }

    #[test]
    fn line_prompt_distinguishes_empty_from_cancel() {
        let mut output = Vec::new();

        let mut input = Cursor::new("\n");
        let mut prompt = LinePrompt::new(&mut input, &mut output);
        assert_eq!(prompt.ask("Amount?", Some(2.0)).as_deref(), Some(""));

        let mut input = Cursor::new("");
        let mut prompt = LinePrompt::new(&mut input, &mut output);
        assert_eq!(prompt.ask("Amount?", None), None);

        assert_eq!(String::from_utf8(output).unwrap(), "Amount? [2] Amount? ");
    }

    #[test]
    fn renders_marks_and_amounts() {
        let item = ShoppingItem {
            id: "a".to_string(),
            name: "Bread".to_string(),
            checked: true,
            amount: Some(2.5),
        };
        assert_eq!(render_item(1, &item), "  1. [x] Bread  2.5 Ft");
    }

    /// In-memory stand-in for the API.
    fn fake_api() -> impl FnMut(HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut items: Vec<serde_json::Value> = Vec::new();
        let mut next_id = 0;
        move |req: HttpRequest| {
            let id = req.path.rsplit('/').next().unwrap_or_default().to_string();
            let body = match req.method {
                HttpMethod::Get => serde_json::Value::Array(items.clone()),
                HttpMethod::Post => {
                    next_id += 1;
                    let mut item: serde_json::Value =
                        serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                    item["id"] = next_id.to_string().into();
                    items.push(item.clone());
                    item
                }
                HttpMethod::Put => {
                    let mut item: serde_json::Value =
                        serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                    item["id"] = id.clone().into();
                    match items.iter_mut().find(|i| i["id"] == id.as_str()) {
                        Some(slot) => {
                            *slot = item.clone();
                            item
                        }
                        None => serde_json::Value::Null,
                    }
                }
                HttpMethod::Delete => {
                    items.retain(|i| i["id"] != id.as_str());
                    serde_json::json!({"message": "Item deleted"})
                }
            };
            let status = if req.method == HttpMethod::Post { 201 } else { 200 };
            Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            })
        }
    }

    #[test]
    fn session_adds_checks_and_removes() {
        let mut list = ShoppingList::new(ShoppingClient::new("http://api"));
        let mut transport = fake_api();
        let mut input = Cursor::new("add Bread\nadd Milk\ntoggle 1\n12.5\namount 2\n\nrm 2\nquit\n");
        let mut output = Vec::new();

        run(&mut list, &mut transport, &mut input, &mut output).unwrap();

        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].name, "Bread");
        assert!(list.items()[0].checked);
        assert_eq!(list.total_amount(), 12.5);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Enter amount spent on Bread:"));
        assert!(output.contains("Enter new amount for Milk:"));
        assert!(output.ends_with("Total: 12.5 Ft\n> "));
    }

    #[test]
    fn session_shows_zero_total_for_empty_and_amountless_lists() {
        let mut list = ShoppingList::new(ShoppingClient::new("http://api"));
        let mut transport = fake_api();
        let mut input = Cursor::new("add Bread\nquit\n");
        let mut output = Vec::new();

        run(&mut list, &mut transport, &mut input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("  (empty)\nTotal: 0 Ft\n"));
        assert!(output.contains("[ ] Bread\nTotal: 0 Ft\n"));
        assert!(!output.contains("-0"));
    }

    #[test]
    fn session_reports_unknown_positions() {
        let mut list = ShoppingList::new(ShoppingClient::new("http://api"));
        let mut transport = fake_api();
        let mut input = Cursor::new("toggle 4\n");
        let mut output = Vec::new();

        run(&mut list, &mut transport, &mut input, &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("no item 4"));
    }
}
