//! Interactive decision client.
//!
//! Reads one line at a time. A line is a question, a flower number when
//! flowers are on offer, or a `:command`.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::application::handlers::{AskQuestionCommand, BuildResultCommand, EmitRecordCommand};
use crate::bootstrap::Services;
use crate::domain::decision::{DecisionSession, DecisionStage, IgnoredReason, QuestionKind, TransitionOutcome};
use crate::domain::foundation::Timestamp;
use crate::domain::result::ResultArtifact;

const HELP: &str = "\
Type a question to get flowers, then pick one by number.
  :record [ref]  record the last result (uses the configured ref if omitted)
  :save <path>   write the last result card as SVG
  :reset         start over
  :help          show this help
  :quit          leave";

/// Interactive client over any line source and sink.
pub struct DecisionRepl {
    services: Services,
    user_ref: Option<String>,
    session: DecisionSession,
    artifact: Option<ResultArtifact>,
}

impl DecisionRepl {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            user_ref: None,
            session: DecisionSession::new(),
            artifact: None,
        }
    }

    pub fn with_user_ref(mut self, user_ref: Option<String>) -> Self {
        self.user_ref = user_ref;
        self
    }

    pub fn session(&self) -> &DecisionSession {
        &self.session
    }

    pub fn artifact(&self) -> Option<&ResultArtifact> {
        self.artifact.as_ref()
    }

    /// Runs until `:quit` or end of input.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "🌸 LotusGuess - ask the flowers. :help for commands.")?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.handle_line(line, output).await? {
                break;
            }
        }
        Ok(())
    }

    /// Handles one line; `false` ends the session.
    async fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<bool> {
        if let Some(command) = line.strip_prefix(':') {
            let (name, arg) = match command.split_once(char::is_whitespace) {
                Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
                None => (command, None),
            };
            match name {
                "q" | "quit" | "exit" => return Ok(false),
                "help" | "h" => writeln!(output, "{}", HELP)?,
                "reset" => {
                    self.session.reset();
                    self.artifact = None;
                    writeln!(output, "Cleared. Ask another question.")?;
                }
                "record" => self.record(arg, output).await?,
                "save" => self.save(arg, output)?,
                other => writeln!(output, "Unknown command :{} (try :help)", other)?,
            }
            return Ok(true);
        }

        if self.session.stage() == DecisionStage::OptionsShown {
            if let Ok(number) = line.parse::<usize>() {
                self.pick(number, output)?;
                return Ok(true);
            }
        }

        self.ask(line, output)?;
        Ok(true)
    }

    fn ask<W: Write>(&mut self, text: &str, output: &mut W) -> io::Result<()> {
        let result = self.services.ask.handle(
            &mut self.session,
            AskQuestionCommand {
                text: text.to_string(),
            },
        );

        match result.outcome {
            TransitionOutcome::Applied => {
                self.artifact = None;
                let kind = match result.kind {
                    Some(QuestionKind::Binary) => "yes or no",
                    Some(QuestionKind::MultiWay { .. }) => "one of several",
                    Some(QuestionKind::OpenEnded { .. }) | None => "open",
                };
                writeln!(output, "The flowers consider your {} question:", kind)?;
                for (i, option) in result.options.iter().enumerate() {
                    writeln!(output, "  {}. {}", i + 1, option.display_name())?;
                }
                writeln!(output, "Pick a flower [1-{}]:", result.options.len())?;
            }
            TransitionOutcome::Ignored(IgnoredReason::InvalidStage { .. }) => {
                writeln!(
                    output,
                    "Pick one of the flowers first, or :reset to ask something else."
                )?;
            }
            TransitionOutcome::Ignored(_) => {
                writeln!(output, "Ask a question first.")?;
            }
        }
        Ok(())
    }

    fn pick<W: Write>(&mut self, number: usize, output: &mut W) -> io::Result<()> {
        let option_id = match number
            .checked_sub(1)
            .and_then(|i| self.session.option_set().options().get(i))
        {
            Some(option) => option.id().clone(),
            None => {
                writeln!(
                    output,
                    "Choose a number between 1 and {}.",
                    self.session.option_set().len()
                )?;
                return Ok(());
            }
        };

        if !self.session.select(&option_id).is_applied() {
            writeln!(output, "That flower is not on offer.")?;
            return Ok(());
        }

        let cmd = BuildResultCommand {
            created_at: Timestamp::now(),
        };
        match self.services.build.handle(&self.session, cmd) {
            Ok(artifact) => {
                let option = artifact.selected_option();
                writeln!(output, "{} The flowers say: {}", option.glyph(), option.meaning())?;
                writeln!(output, "{} - {}", option.label(), option.description())?;
                writeln!(output)?;
                writeln!(output, "{}", artifact.share_text())?;
                writeln!(output, "Share: {}", artifact.compose_link())?;
                writeln!(output, ":record to keep it, :save <path> for the card, or ask again.")?;
                self.artifact = Some(artifact);
            }
            Err(e) => {
                warn!(error = %e, "Result build failed");
                writeln!(output, "Could not build the result: {}", e)?;
            }
        }
        Ok(())
    }

    async fn record<W: Write>(&mut self, arg: Option<&str>, output: &mut W) -> io::Result<()> {
        let user_ref = match arg.map(str::to_string).or_else(|| self.user_ref.clone()) {
            Some(user_ref) => user_ref,
            None => {
                writeln!(output, "Give an account reference: :record <ref>")?;
                return Ok(());
            }
        };
        let artifact = match self.artifact.as_mut() {
            Some(artifact) => artifact,
            None => {
                writeln!(output, "Nothing to record yet. Pick a flower first.")?;
                return Ok(());
            }
        };

        match self
            .services
            .emit
            .handle(artifact, EmitRecordCommand { user_ref })
            .await
        {
            Ok(receipt) => writeln!(output, "Recorded: {}", receipt.external_ref)?,
            Err(e) => writeln!(output, "Recording failed: {}", e)?,
        }
        Ok(())
    }

    fn save<W: Write>(&self, path: Option<&str>, output: &mut W) -> io::Result<()> {
        match (path, &self.artifact) {
            (None, _) => writeln!(output, "Usage: :save <path>"),
            (Some(_), None) => writeln!(output, "Nothing to save yet. Pick a flower first."),
            (Some(path), Some(artifact)) => match std::fs::write(path, &artifact.rendered_image().bytes) {
                Ok(()) => writeln!(output, "Saved card to {}", path),
                Err(e) => writeln!(output, "Could not save {}: {}", path, e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::ScriptedRandom;
    use crate::config::AppConfig;
    use std::io::Cursor;

    fn repl() -> DecisionRepl {
        let services = Services::with_random(
            &AppConfig::default(),
            Box::new(ScriptedRandom::new(vec![0, 0, 0, 0])),
            Box::new(ScriptedRandom::new(vec![17])),
        )
        .unwrap();
        DecisionRepl::new(services)
    }

    async fn drive(repl: &mut DecisionRepl, script: &str) -> String {
        let mut output = Vec::new();
        repl.run(Cursor::new(script.to_string()), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn question_then_pick_builds_result() {
        let mut repl = repl();
        let out = drive(&mut repl, "Should I go out today?\n1\n").await;

        assert!(out.contains("yes or no"));
        assert!(out.contains("Pick a flower [1-2]"));
        assert!(out.contains("The flowers say:"));
        assert_eq!(repl.session().stage(), DecisionStage::Selected);
        assert!(repl.artifact().is_some());
    }

    #[tokio::test]
    async fn multi_way_question_offers_three() {
        let mut repl = repl();
        let out = drive(&mut repl, "Pizza or sushi or tacos?\n").await;

        assert!(out.contains("Pick a flower [1-3]"));
        assert!(out.contains("  3. "));
    }

    #[tokio::test]
    async fn out_of_range_pick_is_rejected() {
        let mut repl = repl();
        let out = drive(&mut repl, "Should I go out today?\n5\n").await;

        assert!(out.contains("Choose a number between 1 and 2."));
        assert_eq!(repl.session().stage(), DecisionStage::OptionsShown);
    }

    #[tokio::test]
    async fn new_question_while_choosing_is_refused() {
        let mut repl = repl();
        let out = drive(&mut repl, "Should I go out today?\nTea or coffee?\n").await;

        assert!(out.contains("Pick one of the flowers first"));
        assert_eq!(
            repl.session().question().map(|q| q.as_str()),
            Some("Should I go out today?")
        );
    }

    #[tokio::test]
    async fn record_attaches_reference() {
        let mut repl = repl();
        let out = drive(&mut repl, "Should I go out today?\n1\n:record 0xabc\n").await;

        assert!(out.contains("Recorded: http://localhost:3000/api/nft-metadata/17"));
        assert!(repl.artifact().unwrap().is_recorded());
    }

    #[tokio::test]
    async fn record_without_result_is_refused() {
        let mut repl = repl().with_user_ref(Some("0xabc".to_string()));
        let out = drive(&mut repl, ":record\n").await;

        assert!(out.contains("Nothing to record yet"));
    }

    #[tokio::test]
    async fn reset_and_quit() {
        let mut repl = repl();
        let out = drive(&mut repl, "Should I go out today?\n:reset\n:quit\nIgnored after quit?\n").await;

        assert!(out.contains("Cleared."));
        assert_eq!(repl.session().stage(), DecisionStage::Empty);
        assert!(repl.session().question().is_none());
    }
}
