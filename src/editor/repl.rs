use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, warn};

use crate::config::Config;
use crate::drom::DromState;
use crate::editor::command::{Command, parse_index};
use crate::error::DromError;
use crate::export::{ExportOutcome, ExportRequest, Exporter, RenderStatus};
use crate::hex::Edge;
use crate::session;

pub const HELP: &str = "\
Welcome to the Drom editor. Commands:
  0 | under            add a hexagon below the current one
  1 | bottom-right     add a hexagon to the bottom right
  2 | top-right        add a hexagon to the top right
  3 | over             add a hexagon above the current one
  4 | top-left         add a hexagon to the top left
  5 | bottom-left      add a hexagon to the bottom left
  print                print the vertices of the current hexagon
  show_all             write the drawing with indices and current edges
  print_full           write the full drawing without indices
  change_hex [i]       make hexagon i current
  remove [i]           remove hexagon i
  remove_last          undo the last added hexagon
  save [name]          save the Drom as <name>.tex
  load [name]          load a Drom from <name>.tex
  help                 show this message
  quit                 write the full drawing and exit";

const PROMPT: &str = "> ";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented editor around a [`DromState`].
///
/// Every rejected input is reported on `output` and leaves the Drom as it was.
pub struct Editor<R, W> {
    input: R,
    output: W,
    drom: DromState,
    exporter: Exporter,
    working_name: String,
    show_indices: bool,
}

impl<R: BufRead, W: Write> Editor<R, W> {
    pub fn new(config: &Config, drom: DromState, input: R, output: W) -> Self {
        Self::with_exporter(config, Exporter::from_config(config), drom, input, output)
    }

    pub fn with_exporter(
        config: &Config,
        exporter: Exporter,
        drom: DromState,
        input: R,
        output: W,
    ) -> Self {
        Self {
            input,
            output,
            drom,
            exporter,
            working_name: config.export.working_name.clone(),
            show_indices: config.export.show_indices,
        }
    }

    pub fn drom(&self) -> &DromState {
        &self.drom
    }

    pub fn into_drom(self) -> DromState {
        self.drom
    }

    /// Runs until `quit` or end of input. The final drawing is written either way.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", HELP)?;
        self.refresh_working()?;

        loop {
            let Some(line) = self.prompt(None)? else {
                debug!("End of input, finishing");
                self.finish()?;
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            if self.execute(command)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Executes one command. Missing arguments are read from the input.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!("Executing {}", command.name());
        let mutating = command.is_mutating();

        let changed = match command {
            Command::Add(edge) => self.add(edge)?,
            Command::ChangeHex(index) => {
                let Some(index) = self.index_argument(index, "Switch to which hexagon?")? else {
                    return Ok(Flow::Continue);
                };
                self.change_hex(index)?
            }
            Command::Remove(index) => {
                let Some(index) = self.index_argument(index, "Remove which hexagon?")? else {
                    return Ok(Flow::Continue);
                };
                self.remove(index)?
            }
            Command::RemoveLast => self.remove_last()?,
            Command::Print => {
                self.print_current()?;
                false
            }
            Command::PrintFull => {
                let request = ExportRequest::full(self.working_name.clone());
                self.export_and_report(&request)?;
                false
            }
            Command::ShowAll => {
                let request = ExportRequest::annotated(
                    self.working_name.clone(),
                    self.drom.current_index(),
                );
                self.export_and_report(&request)?;
                false
            }
            Command::Save(name) => {
                let Some(name) = self.name_argument(name, "Save as (no extension)?")? else {
                    return Ok(Flow::Continue);
                };
                self.save(&name)?;
                false
            }
            Command::Load(name) => {
                let Some(name) = self.name_argument(name, "Load which file (no extension)?")?
                else {
                    return Ok(Flow::Continue);
                };
                self.load(&name)?
            }
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                false
            }
            Command::Quit => {
                self.finish()?;
                return Ok(Flow::Quit);
            }
        };

        if mutating && changed {
            self.refresh_working()?;
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, edge: Edge) -> Result<bool> {
        let source = self.drom.current_index();
        let index = self.drom.add_on(edge);
        writeln!(
            self.output,
            "Added hexagon {} on edge {} of hexagon {}",
            index, edge, source
        )?;
        Ok(true)
    }

    fn change_hex(&mut self, index: usize) -> Result<bool> {
        match self.drom.switch_current(index) {
            Ok(()) => {
                writeln!(self.output, "Current hexagon is now {}", index)?;
                Ok(true)
            }
            Err(err) => self.reject(err),
        }
    }

    fn remove(&mut self, index: usize) -> Result<bool> {
        match self.drom.remove_at(index) {
            Ok(_) => {
                writeln!(
                    self.output,
                    "Removed hexagon {}; current hexagon is {}",
                    index,
                    self.drom.current_index()
                )?;
                Ok(true)
            }
            Err(err) => self.reject(err),
        }
    }

    fn remove_last(&mut self) -> Result<bool> {
        let removed = self.drom.len().saturating_sub(1);
        match self.drom.remove_last() {
            Ok(_) => {
                writeln!(
                    self.output,
                    "Removed hexagon {}; current hexagon is {}",
                    removed,
                    self.drom.current_index()
                )?;
                Ok(true)
            }
            Err(err) => self.reject(err),
        }
    }

    fn print_current(&mut self) -> Result<()> {
        let index = self.drom.current_index();
        let vertices = *self.drom.current().vertices();
        writeln!(self.output, "Hexagon {}:", index)?;
        for (k, vertex) in vertices.iter().enumerate() {
            writeln!(self.output, "  {}: {}", k, vertex)?;
        }
        Ok(())
    }

    fn save(&mut self, name: &str) -> Result<()> {
        let path = self.exporter.document_path(name);
        let contents = self
            .exporter
            .document(&self.drom, &ExportRequest::full(name));
        match session::save_document(&path, &contents) {
            Ok(path) => writeln!(self.output, "Saved to {}", path.display())?,
            Err(err) => writeln!(self.output, "Could not save: {:#}", err)?,
        }
        Ok(())
    }

    fn load(&mut self, name: &str) -> Result<bool> {
        let path = self.exporter.document_path(name);
        match session::load_drom(&path) {
            Ok(drom) => {
                self.drom = drom;
                writeln!(
                    self.output,
                    "Loaded {} hexagons; current hexagon is {}",
                    self.drom.len(),
                    self.drom.current_index()
                )?;
                Ok(true)
            }
            Err(err) => {
                writeln!(self.output, "Could not load: {:#}", err)?;
                Ok(false)
            }
        }
    }

    fn reject(&mut self, err: DromError) -> Result<bool> {
        writeln!(self.output, "{}", err)?;
        Ok(false)
    }

    /// Rewrites the working document: indices (if configured) and the edge
    /// numbers of the current hexagon.
    fn refresh_working(&mut self) -> Result<()> {
        let request = ExportRequest {
            show_indices: self.show_indices,
            ..ExportRequest::annotated(self.working_name.clone(), self.drom.current_index())
        };
        if let Err(err) = self.exporter.export(&self.drom, &request) {
            warn!("Failed to refresh working document: {}", err);
            writeln!(self.output, "Could not write working document: {}", err)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let request = ExportRequest::full(self.working_name.clone());
        self.export_and_report(&request).map(|_| ())
    }

    fn export_and_report(&mut self, request: &ExportRequest) -> Result<Option<ExportOutcome>> {
        match self.exporter.export(&self.drom, request) {
            Ok(outcome) => {
                match &outcome.render {
                    RenderStatus::Rendered(pdf) => {
                        writeln!(self.output, "Wrote {}", pdf.display())?
                    }
                    RenderStatus::Skipped => {
                        writeln!(self.output, "Wrote {}", outcome.tex_path.display())?
                    }
                    RenderStatus::Failed(reason) => writeln!(
                        self.output,
                        "Wrote {} (rendering failed: {})",
                        outcome.tex_path.display(),
                        reason
                    )?,
                }
                Ok(Some(outcome))
            }
            Err(err) => {
                writeln!(self.output, "Export failed: {}", err)?;
                Ok(None)
            }
        }
    }

    fn index_argument(&mut self, given: Option<usize>, question: &str) -> Result<Option<usize>> {
        if given.is_some() {
            return Ok(given);
        }
        let Some(line) = self.prompt(Some(question))? else {
            return Ok(None);
        };
        match parse_index("index", &line) {
            Ok(index) => Ok(Some(index)),
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                Ok(None)
            }
        }
    }

    fn name_argument(&mut self, given: Option<String>, question: &str) -> Result<Option<String>> {
        if given.is_some() {
            return Ok(given);
        }
        let Some(line) = self.prompt(Some(question))? else {
            return Ok(None);
        };
        let name = line.trim();
        if name.is_empty() {
            writeln!(self.output, "No file name given")?;
            return Ok(None);
        }
        Ok(Some(name.to_string()))
    }

    /// Reads one line, printing `question` and the prompt first.
    /// Returns `None` at end of input.
    fn prompt(&mut self, question: Option<&str>) -> Result<Option<String>> {
        if let Some(question) = question {
            writeln!(self.output, "{}", question)?;
        }
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
