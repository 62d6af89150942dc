//! The interactive menu loop around a `PrefixIndex`.
//!
//! Generic over input and output, so it can be driven by stdin/stdout as well as by tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::style::{Palette, Style};
use crate::trie::{normalize, InsertResult, PrefixIndex};
use crate::unicode_bar::unicode_bar;

const LINE_WIDTH: usize = 54;
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    AddWord,
    Statistics,
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid input. Please enter a number between 1-5.")]
    NotANumber,
    #[error("Invalid choice {0}. Please select a number between 1-5.")]
    OutOfRange(i64),
}

impl FromStr for Action {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice: i64 = s.trim().parse().map_err(|_| MenuError::NotANumber)?;
        match choice {
            1 => Ok(Action::Search),
            2 => Ok(Action::AddWord),
            3 => Ok(Action::Statistics),
            4 => Ok(Action::Help),
            5 => Ok(Action::Exit),
            _ => Err(MenuError::OutOfRange(choice)),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    index: PrefixIndex,
    input: R,
    output: W,
    palette: Palette,
    show_timing: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(index: PrefixIndex, input: R, output: W, palette: Palette, show_timing: bool) -> Self {
        Self {
            index,
            input,
            output,
            palette,
            show_timing,
        }
    }

    pub fn into_index(self) -> PrefixIndex {
        self.index
    }

    /// Prints the banner and how many words were loaded (in `load_time`).
    pub fn greet(&mut self, load_time: Duration) -> io::Result<()> {
        let p = self.palette;
        writeln!(self.output)?;
        writeln!(self.output, "  {}", p.paint(Style::Banner, format!("╔{}╗", "═".repeat(LINE_WIDTH))))?;
        for title in ["TRIE AUTO-SUGGEST", "Prefix-based word suggestions"] {
            writeln!(self.output, "  {}", p.paint(Style::Banner, format!("║{:^width$}║", title, width = LINE_WIDTH)))?;
        }
        writeln!(self.output, "  {}", p.paint(Style::Banner, format!("╚{}╝", "═".repeat(LINE_WIDTH))))?;
        writeln!(self.output)?;

        let mut message = format!("Ready! Loaded {} words", self.index.count());
        if self.show_timing {
            message.push_str(&format!(" in {:.3}ms", load_time.as_secs_f64() * 1000.0));
        }
        message.push('.');
        self.success(&message)
    }

    /// Runs the menu loop until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.menu()?;
            let Some(line) = self.read_line()? else {
                debug!("end of input at menu");
                return self.farewell();
            };
            let flow = match line.parse::<Action>() {
                Ok(action) => {
                    trace!(?action, "menu choice");
                    match action {
                        Action::Search => self.search()?,
                        Action::AddWord => self.add_word()?,
                        Action::Statistics => self.statistics()?,
                        Action::Help => self.help()?,
                        Action::Exit => Flow::Exit,
                    }
                }
                Err(error) => {
                    debug!(input = %line, %error, "invalid menu choice");
                    writeln!(self.output)?;
                    self.error(&error.to_string())?;
                    writeln!(self.output)?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                return self.farewell();
            }
        }
    }

    /// Reads one line without its line ending, or `None` at the end of the input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str, hint: Option<&str>) -> io::Result<Option<String>> {
        let p = self.palette;
        write!(self.output, "  {}", p.paint(Style::Prompt, format!("→ {text}")))?;
        if let Some(hint) = hint {
            write!(self.output, " {}", p.paint(Style::Dim, hint))?;
        }
        write!(self.output, "{}", p.paint(Style::Prompt, ": "))?;
        self.output.flush()?;
        self.read_line()
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(prefix) = self.prompt("Enter search prefix", Some("(or press Enter to show all)"))? else {
            return Ok(Flow::Exit);
        };

        let start = Instant::now();
        let suggestions = self.index.suggest(&prefix);
        let elapsed = start.elapsed();
        info!(prefix = %normalize(&prefix), matches = suggestions.len(), ?elapsed, "search");

        let p = self.palette;
        writeln!(self.output)?;
        if suggestions.is_empty() {
            self.error(&format!("No suggestions found for \"{prefix}\""))?;
            let hint = if self.index.is_empty() {
                "The dictionary is empty, add some words first."
            } else {
                "Try a different prefix or check spelling."
            };
            writeln!(self.output, "  {}", p.paint(Style::Dim, hint))?;
        } else {
            self.thick_line()?;
            writeln!(self.output)?;
            let plural = if suggestions.len() == 1 { "" } else { "es" };
            write!(self.output, "  {}", p.paint(Style::Highlight, format!("✓ Found {} match{plural}", suggestions.len())))?;
            if self.show_timing {
                write!(self.output, " {}", p.paint(Style::Dim, format!("(in {}μs)", elapsed.as_micros())))?;
            }
            writeln!(self.output)?;
            writeln!(self.output)?;
            self.thin_line()?;
            writeln!(self.output)?;
            for (i, word) in suggestions.iter().enumerate() {
                let number = format!("[{:2}]", i + 1);
                writeln!(self.output, "    {}  {}", p.paint(Style::Dim, number), p.paint(Style::Label, word))?;
            }
            writeln!(self.output)?;
            self.thick_line()?;
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn add_word(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt("Enter new word to add", None)? else {
            return Ok(Flow::Exit);
        };
        let word = word.trim();

        writeln!(self.output)?;
        if word.is_empty() {
            self.error("Cannot add empty word. Please try again.")?;
        } else {
            match self.index.insert(word) {
                InsertResult::Inserted => {
                    info!(word = %normalize(word), total = self.index.count(), "added word");
                    self.success(&format!("Added \"{word}\" to the dictionary."))?;
                    let total = format!("Dictionary now contains {} words.", self.index.count());
                    writeln!(self.output, "  {}", self.palette.paint(Style::Dim, total))?;
                }
                InsertResult::AlreadyPresent => {
                    self.info(&format!("Word \"{word}\" already exists in the dictionary."))?;
                }
                InsertResult::Ignored => {
                    debug!(%word, "word without letters");
                    self.error(&format!("\"{word}\" contains no letters, nothing was added."))?;
                }
            }
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn statistics(&mut self) -> io::Result<Flow> {
        let p = self.palette;
        writeln!(self.output)?;
        self.thick_line()?;
        writeln!(self.output)?;
        writeln!(self.output, "  {}", p.paint(Style::Heading, "SYSTEM STATISTICS"))?;
        writeln!(self.output)?;
        self.thin_line()?;
        writeln!(self.output)?;
        let rows = [
            ("Total words:", self.index.count().to_string()),
            ("Trie nodes:", self.index.node_count().to_string()),
            ("Data structure:", "Trie (prefix tree)".to_string()),
            ("Search algorithm:", "Prefix walk + depth-first collection".to_string()),
            ("Result sorting:", "Alphabetical".to_string()),
        ];
        for (label, value) in rows {
            writeln!(self.output, "  {}{value}", p.paint(Style::Label, format!("{label:<20}")))?;
        }

        let by_letter: Vec<(char, usize)> = ('a'..='z')
            .map(|letter| (letter, self.index.count_with_prefix(&letter.to_string())))
            .filter(|&(_, count)| count > 0)
            .collect();
        if let Some(max) = by_letter.iter().map(|&(_, count)| count).max() {
            writeln!(self.output)?;
            writeln!(self.output, "  {}", p.paint(Style::Label, "Words by initial letter:"))?;
            writeln!(self.output)?;
            for (letter, count) in by_letter {
                let bar = unicode_bar(count as f64 / max as f64, BAR_WIDTH);
                writeln!(self.output, "    {}  {bar} {count}", p.paint(Style::Key, letter))?;
            }
        }

        writeln!(self.output)?;
        self.thin_line()?;
        writeln!(self.output)?;
        writeln!(self.output, "  {}", p.paint(Style::Dim, "Tip: Press Enter at the search prompt to view all words."))?;
        writeln!(self.output)?;
        self.thick_line()?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn help(&mut self) -> io::Result<Flow> {
        let p = self.palette;
        writeln!(self.output)?;
        self.thick_line()?;
        writeln!(self.output)?;
        writeln!(self.output, "  {}", p.paint(Style::Heading, "HELP"))?;
        writeln!(self.output)?;
        self.thin_line()?;
        writeln!(self.output)?;
        writeln!(self.output, "  {}", p.paint(Style::Label, "How to use:"))?;
        writeln!(self.output)?;
        writeln!(self.output, "    • Enter any prefix to see matching words")?;
        writeln!(self.output, "    • Press Enter (empty) to display all words")?;
        writeln!(self.output, "    • Search is case-insensitive: \"AP\" = \"ap\"")?;
        writeln!(self.output, "    • Only the letters a-z count, other characters are ignored")?;
        writeln!(self.output, "    • Add words dynamically during runtime")?;
        writeln!(self.output)?;
        self.thin_line()?;
        writeln!(self.output)?;
        writeln!(self.output, "  {}", p.paint(Style::Label, "Examples:"))?;
        writeln!(self.output)?;
        let examples = [
            ("\"ap\"", "apartment, app, appetite, apple, apply, apricot"),
            ("\"ba\"", "badge, balance, ball, banana, bat, battle"),
            ("\"\"", "all dictionary words"),
        ];
        for (prefix, result) in examples {
            writeln!(self.output, "    Prefix: {}  →  {result}", p.paint(Style::Prompt, format!("{prefix:<4}")))?;
        }
        writeln!(self.output)?;
        self.thin_line()?;
        writeln!(self.output)?;
        writeln!(self.output, "  {}", p.paint(Style::Label, "Complexity:"))?;
        writeln!(self.output)?;
        let complexities = [
            ("Insert:", "O(L)", "L = word length"),
            ("Search:", "O(L + K×M)", "K = results, M = average length"),
            ("Space:", "O(N×M)", "N = words, M = average length"),
        ];
        for (operation, complexity, legend) in complexities {
            writeln!(self.output, "    • {operation:<8} {}  {legend}", p.paint(Style::Success, format!("{complexity:<10}")))?;
        }
        writeln!(self.output)?;
        self.thick_line()?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn menu(&mut self) -> io::Result<()> {
        let p = self.palette;
        writeln!(self.output)?;
        self.thick_line()?;
        writeln!(self.output)?;
        writeln!(self.output, "  {}", p.paint(Style::Prompt, "SELECT AN OPTION:"))?;
        writeln!(self.output)?;
        let entries = [
            "Search for suggestions",
            "Add new word",
            "View statistics",
            "Help",
            "Exit",
        ];
        for (i, entry) in entries.iter().enumerate() {
            writeln!(self.output, "    {}  {entry}", p.paint(Style::Key, format!("[{}]", i + 1)))?;
        }
        writeln!(self.output)?;
        self.thick_line()?;
        writeln!(self.output)?;
        write!(self.output, "  {}", p.paint(Style::Prompt, "→ Your choice: "))?;
        self.output.flush()
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        self.thick_line()?;
        writeln!(self.output)?;
        self.success("Thank you for using Trie Auto-Suggest!")?;
        writeln!(self.output, "  {}", self.palette.paint(Style::Dim, "Session terminated. Goodbye!"))?;
        writeln!(self.output)?;
        self.thick_line()?;
        writeln!(self.output)?;
        self.output.flush()
    }

    fn thick_line(&mut self) -> io::Result<()> {
        writeln!(self.output, "  {}", self.palette.paint(Style::Banner, "=".repeat(LINE_WIDTH)))
    }

    fn thin_line(&mut self) -> io::Result<()> {
        writeln!(self.output, "  {}", self.palette.paint(Style::Dim, "-".repeat(LINE_WIDTH)))
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "  {}", self.palette.paint(Style::Success, format!("✓ {message}")))
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "  {}", self.palette.paint(Style::Error, format!("✗ {message}")))
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "  {}", self.palette.paint(Style::Info, format!("ℹ {message}")))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Runs a whole session with the given input lines, returns the output and the final index.
    fn session(words: &[&str], input: &str) -> (String, PrefixIndex) {
        let index: PrefixIndex = words.iter().collect();
        let mut output = Vec::new();
        let mut shell = Shell::new(index, input.as_bytes(), &mut output, Palette::new(false), false);
        shell.run().unwrap();
        let index = shell.into_index();
        (String::from_utf8(output).unwrap(), index)
    }

    #[test]
    fn parse_action() {
        assert_eq!("1".parse::<Action>(), Ok(Action::Search));
        assert_eq!(" 5 ".parse::<Action>(), Ok(Action::Exit));
        assert_eq!("abc".parse::<Action>(), Err(MenuError::NotANumber));
        assert_eq!("".parse::<Action>(), Err(MenuError::NotANumber));
        assert_eq!("0".parse::<Action>(), Err(MenuError::OutOfRange(0)));
        assert_eq!("-3".parse::<Action>(), Err(MenuError::OutOfRange(-3)));
        assert_eq!("6".parse::<Action>(), Err(MenuError::OutOfRange(6)));
    }

    #[test]
    fn search_prints_sorted_matches() {
        let (output, _) = session(&["apply", "app", "apple", "banana"], "1\nAP\n5\n");
        assert!(output.contains("✓ Found 3 matches\n"), "{output}");
        let app = output.find("[ 1]  app\n").unwrap();
        let apple = output.find("[ 2]  apple\n").unwrap();
        let apply = output.find("[ 3]  apply\n").unwrap();
        assert!(app < apple && apple < apply);
        assert!(!output.contains("banana"));
        assert!(output.ends_with(&format!("Session terminated. Goodbye!\n\n  {}\n\n", "=".repeat(LINE_WIDTH))));
    }

    #[test]
    fn search_single_match() {
        let (output, _) = session(&["apple", "banana"], "1\nb\n");
        assert!(output.contains("✓ Found 1 match\n"), "{output}");
        assert!(output.contains("[ 1]  banana\n"));
    }

    #[test]
    fn search_empty_prefix_shows_all() {
        let (output, _) = session(&["cat", "bat", "ant"], "1\n\n5\n");
        assert!(output.contains("✓ Found 3 matches"));
        assert!(output.contains("[ 1]  ant\n"));
        assert!(output.contains("[ 3]  cat\n"));
    }

    #[test]
    fn search_without_matches() {
        let (output, _) = session(&["apple"], "1\nzzz\n5\n");
        assert!(output.contains("✗ No suggestions found for \"zzz\"\n"));
        assert!(output.contains("Try a different prefix or check spelling."));

        let (output, _) = session(&[], "1\na\n5\n");
        assert!(output.contains("The dictionary is empty, add some words first."));
    }

    #[test]
    fn add_word() {
        let (output, index) = session(&["apple"], "2\n  Banana \n2\nBANANA\n2\n   \n2\n123\n5\n");
        assert!(output.contains("✓ Added \"Banana\" to the dictionary.\n"), "{output}");
        assert!(output.contains("Dictionary now contains 2 words.\n"));
        assert!(output.contains("ℹ Word \"BANANA\" already exists in the dictionary.\n"));
        assert!(output.contains("✗ Cannot add empty word. Please try again.\n"));
        assert!(output.contains("✗ \"123\" contains no letters, nothing was added.\n"));
        assert_eq!(index.count(), 2);
        assert_eq!(index.suggest("b"), ["banana"]);
    }

    #[test]
    fn invalid_menu_choices() {
        let (output, _) = session(&[], "hello\n9\n5\n");
        assert!(output.contains("✗ Invalid input. Please enter a number between 1-5.\n"));
        assert!(output.contains("✗ Invalid choice 9. Please select a number between 1-5.\n"));
        assert_eq!(output.matches("→ Your choice: ").count(), 3);
    }

    #[test]
    fn statistics() {
        let (output, _) = session(&["apple", "app", "banana"], "3\n5\n");
        assert!(output.contains("Total words:        3\n"), "{output}");
        // Root, a-p-p-l-e, b-a-n-a-n-a.
        assert!(output.contains("Trie nodes:         12\n"));
        assert!(output.contains(&format!("    a  {} 2\n", "█".repeat(BAR_WIDTH))));
        assert!(output.contains(&format!("    b  {}{} 1\n", "█".repeat(BAR_WIDTH / 2), " ".repeat(BAR_WIDTH / 2))));
    }

    #[test]
    fn help() {
        let (output, _) = session(&[], "4\n5\n");
        assert!(output.contains("HELP\n"));
        assert!(output.contains("Press Enter (empty) to display all words"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (output, _) = session(&["apple"], "");
        assert!(output.contains("Session terminated. Goodbye!"));

        // Also in the middle of an action.
        let (output, index) = session(&["apple"], "2\n");
        assert!(output.contains("Session terminated. Goodbye!"));
        assert_eq!(index.count(), 1);
    }

    #[test]
    fn greet() {
        let index: PrefixIndex = ["apple", "app"].into_iter().collect();
        let mut output = Vec::new();
        let mut shell = Shell::new(index, io::empty(), &mut output, Palette::new(false), true);
        shell.greet(Duration::from_micros(1500)).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("TRIE AUTO-SUGGEST"));
        assert!(output.contains("✓ Ready! Loaded 2 words in 1.500ms.\n"), "{output}");
    }
}
