use std::{
    io::{BufRead, Write},
    path::Path,
};

use bigraph::{maximum_matching, BipartiteGraph};

use crate::output::{print_error, print_matching, RenderMode};

pub const BANNER: &str = r#"Match Maker
----------------------------

Please enter a bipartite graph as an adjacency matrix of size |X|x|Y|.
It parses in JSON format, so input is as JSON.
ex:
>>[
>>[1, 1],
>>[1, 1]
>>]
>>!
this creates K2,2.

End your input with the character: !
to exit, press Ctrl+C or Ctrl+D"#;

/// Line that ends a matrix.
const TERMINATOR: &str = "!";

/// A read-match-print loop over any line source.
pub struct Session<R, W> {
    input: R,
    out: W,
    mode: RenderMode,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, mode: RenderMode) -> Self {
        Self { input, out, mode }
    }

    /// Runs until the input is exhausted.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        loop {
            let Some(text) = self.read_matrix()? else {
                return Ok(());
            };

            let graph: BipartiteGraph = match serde_json::from_str(&text) {
                Ok(graph) => graph,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected input");
                    print_error(&mut self.out, &format!("json unmarshal error: {e}"))?;
                    continue;
                }
            };

            let max = maximum_matching(&graph);
            print_matching(&mut self.out, &graph, &max)?;

            self.prompt("print to pdf? (y/n):")?;
            let Some(answer) = self.read_line()? else {
                return Ok(());
            };
            if !answer.trim().to_lowercase().starts_with('y') {
                continue;
            }

            writeln!(
                self.out,
                "give a new directory name to save tex and pdf files. \
                 If not a path, will save in the current directory."
            )?;
            self.prompt(">>")?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let dir = line.trim();
            if dir.is_empty() {
                writeln!(self.out, "no directory given, aborting...")?;
                continue;
            }
            writeln!(self.out, "saving file to {dir}")?;
            match self.mode.render(&graph, &max.matching, Path::new(dir)) {
                Ok(path) => writeln!(self.out, "wrote {}", path.display())?,
                Err(e) => print_error(&mut self.out, &e)?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// Collects lines until one that trims to `!`. `None` on end of input.
    fn read_matrix(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = String::new();
        loop {
            self.prompt(">>")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.trim() == TERMINATOR {
                return Ok(Some(buf));
            }
            buf.push_str(&line);
        }
    }
}
