//! Interview prep session — startup sequence and the blocking turn loop.
//!
//! Input and output are injected (`LineSource` / `Write`) and the model sits behind
//! `ChatModel`, so the whole loop runs in tests against scripted input.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::input::LineSource;
use crate::llm_client::{ChatModel, LlmError, Turn};
use crate::modes::{InterviewMode, ResponseStyle};
use crate::profile::CandidateProfile;
use crate::prompts::{generate_system_prompt, COMMON_HR_QUESTIONS};

const RULE_WIDTH: usize = 60;

/// In-session control words. Matched case-insensitively, never sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Examples,
    Profile,
    ChangeMode,
    ChangeStyle,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "exit" => Some(Command::Exit),
            "examples" => Some(Command::Examples),
            "profile" => Some(Command::Profile),
            "change mode" => Some(Command::ChangeMode),
            "change style" => Some(Command::ChangeStyle),
            _ => None,
        }
    }
}

/// One interview prep conversation: fixed system prompt, growing history.
pub struct Session {
    system_prompt: String,
    history: Vec<Turn>,
    model: Arc<dyn ChatModel>,
}

impl Session {
    pub fn new(system_prompt: String, model: Arc<dyn ChatModel>) -> Self {
        Self {
            system_prompt,
            history: Vec::new(),
            model,
        }
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Sends the question with the entire history and records the reply.
    ///
    /// A failed call removes the question again, so history always alternates
    /// user/assistant and a failed exchange never reaches later calls.
    pub async fn ask(&mut self, question: &str) -> Result<String, LlmError> {
        self.history.push(Turn::user(question));
        match self.model.generate(&self.system_prompt, &self.history).await {
            Ok(reply) => {
                self.history.push(Turn::assistant(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }
}

/// Runs the full agent: load profile, choose mode and style, then loop on questions.
///
/// Returns `Ok` on `exit` or end of input. Returns `Err` when the profile cannot be
/// loaded or the model rejects the credential; the caller exits non-zero.
pub async fn run<L: LineSource, W: Write>(
    profile_path: &Path,
    model: Arc<dyn ChatModel>,
    mut input: L,
    mut out: W,
) -> Result<()> {
    writeln!(
        out,
        "\n{}\n",
        "🎯 HR Interview Prep Agent".bold().green()
    )?;
    writeln!(out, "This agent will help you prepare for HR interviews by:")?;
    writeln!(out, "  • Answering common HR questions in first person")?;
    writeln!(out, "  • Providing STAR format responses for behavioral questions")?;
    writeln!(out, "  • Helping with salary negotiations")?;
    writeln!(out, "  • Simulating different interview scenarios\n")?;

    let profile = CandidateProfile::load(profile_path)
        .with_context(|| format!("Error loading profile from {}", profile_path.display()))?;
    info!("Loaded profile for {}", profile.personal_info.full_name);
    print_profile_confirmation(&mut out, &profile)?;

    writeln!(out, "📋 Select interview mode:")?;
    for (i, mode) in InterviewMode::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, mode.menu_label())?;
    }
    let choice = input.read_line("\nEnter mode (1-5) [default: 5]: ", &mut out)?;
    let mode = InterviewMode::from_choice(choice.as_deref().unwrap_or(""));
    writeln!(out, "\n{} Mode: {mode}\n", "✓".green())?;

    writeln!(out, "📝 Select response style:")?;
    for (i, style) in ResponseStyle::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, style.menu_label())?;
    }
    let choice = input.read_line("\nEnter style (1-3) [default: 2]: ", &mut out)?;
    let style = ResponseStyle::from_choice(choice.as_deref().unwrap_or(""));
    writeln!(out, "\n{} Style: {style}\n", "✓".green())?;

    let mut session = Session::new(generate_system_prompt(&profile, mode, style), model);
    info!("Session started (mode={mode}, style={style})");

    let rule = "━".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "🎤 Interview Prep Session Started")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\nAsk any HR question, or type:")?;
    writeln!(out, "  • \"examples\" - see common HR questions")?;
    writeln!(out, "  • \"change mode\" - switch interview mode")?;
    writeln!(out, "  • \"change style\" - switch response style")?;
    writeln!(out, "  • \"profile\" - view your profile summary")?;
    writeln!(out, "  • \"exit\" - end session")?;

    loop {
        let Some(line) = input.read_line("\n💬 Your question: ", &mut out)? else {
            writeln!(out)?;
            break;
        };
        if line.is_empty() {
            continue;
        }
        input.remember(&line);

        match Command::parse(&line) {
            Some(Command::Exit) => {
                writeln!(out, "\n👋 Good luck with your interviews!\n")?;
                break;
            }
            Some(Command::Examples) => print_examples(&mut out)?,
            Some(Command::Profile) => print_profile_summary(&mut out, &profile)?,
            Some(Command::ChangeMode) | Some(Command::ChangeStyle) => {
                writeln!(
                    out,
                    "\n{}  Mode and style are fixed for this session. Restart the agent to change them.",
                    "⚠️".yellow()
                )?;
            }
            None => {
                writeln!(out, "\n🤖 Preparing response...\n")?;
                match session.ask(&line).await {
                    Ok(answer) => {
                        debug!("Turn complete, history length {}", session.history().len());
                        writeln!(out, "{rule}")?;
                        writeln!(out, "💡 SUGGESTED ANSWER:")?;
                        writeln!(out, "{rule}")?;
                        writeln!(out, "\n{answer}\n")?;
                        writeln!(out, "{rule}")?;
                    }
                    Err(e) if e.is_credential_failure() => {
                        writeln!(out, "\n{}: {e}", "error".red())?;
                        print_credential_help(&mut out)?;
                        bail!("model credential unavailable: {e}");
                    }
                    Err(e) => {
                        writeln!(out, "\n{}: {e}", "error".red())?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_profile_confirmation<W: Write>(out: &mut W, profile: &CandidateProfile) -> Result<()> {
    let check = "✓".green();
    let comp = &profile.compensation;
    writeln!(
        out,
        "{check} Loaded profile for {}",
        profile.personal_info.full_name
    )?;
    writeln!(
        out,
        "{check} Current CTC: {}",
        comp.current_ctc.display_value
    )?;
    writeln!(
        out,
        "{check} Expected CTC: {}",
        comp.expected_ctc.display_range
    )?;
    writeln!(
        out,
        "{check} Location: {}\n",
        profile.location_transition()
    )?;
    Ok(())
}

fn print_examples<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n📚 Common HR Questions:")?;
    for (category, questions) in COMMON_HR_QUESTIONS {
        writeln!(out, "\n{}:", category.to_uppercase())?;
        for (i, q) in questions.iter().enumerate() {
            writeln!(out, "  {}. {q}", i + 1)?;
        }
    }
    Ok(())
}

fn print_profile_summary<W: Write>(out: &mut W, profile: &CandidateProfile) -> Result<()> {
    let comp = &profile.compensation;
    let experience = profile
        .experience
        .iter()
        .map(|e| format!("{} at {} ({})", e.role, e.company, e.duration))
        .collect::<Vec<_>>()
        .join("; ");

    writeln!(out, "\n👤 Profile Summary:\n")?;
    writeln!(out, "Name: {}", profile.personal_info.full_name)?;
    writeln!(out, "Role: {}", profile.career_narrative.current_role)?;
    writeln!(out, "Experience: {experience}")?;
    writeln!(out, "Current CTC: {}", comp.current_ctc.display_value)?;
    writeln!(out, "Expected CTC: {}", comp.expected_ctc.display_range)?;
    writeln!(out, "Location: {}", profile.location_transition())?;
    if let Some(site) = &profile.additional_notes.portfolio_website {
        writeln!(out, "Portfolio: {site}")?;
    }
    Ok(())
}

pub fn print_credential_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\n{}  Please set your ANTHROPIC_API_KEY environment variable.",
        "⚠️".yellow()
    )?;
    writeln!(out, "   export ANTHROPIC_API_KEY=\"your_api_key_here\"  (or add it to .env)")?;
    writeln!(
        out,
        "   You can get an API key from: https://console.anthropic.com/\n"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::input::BufReadLines;
    use crate::llm_client::Role;

    /// Model that answers from a script and records the history it was sent.
    struct ScriptedModel {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        seen: Mutex<Vec<Vec<Turn>>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into_iter().rev().collect()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn answering(n: usize) -> Arc<Self> {
            Self::new((1..=n).map(|i| Ok(format!("answer {i}"))).collect())
        }

        fn calls(&self) -> Vec<Vec<Turn>> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        async fn generate(&self, _system: &str, turns: &[Turn]) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(turns.to_vec());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok("extra answer".to_string()))
        }
    }

    fn profile_path() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("hr-data/profile.json")
    }

    async fn run_script(model: Arc<ScriptedModel>, script: &str) -> (Result<()>, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let input = BufReadLines::new(Cursor::new(script.to_string()));
        let result = run(&profile_path(), model, input, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_command_parse_case_insensitive() {
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("EXIT"), Some(Command::Exit));
        assert_eq!(Command::parse("  Examples "), Some(Command::Examples));
        assert_eq!(Command::parse("Profile"), Some(Command::Profile));
        assert_eq!(Command::parse("change mode"), Some(Command::ChangeMode));
        assert_eq!(Command::parse("Change Style"), Some(Command::ChangeStyle));
        assert_eq!(Command::parse("exit please"), None);
        assert_eq!(Command::parse("change"), None);
    }

    #[tokio::test]
    async fn test_history_alternates_after_successful_turns() {
        let model = ScriptedModel::answering(3);
        let mut session = Session::new("system".to_string(), model.clone());

        for q in ["q1", "q2", "q3"] {
            session.ask(q).await.unwrap();
        }

        let history = session.history();
        assert_eq!(history.len(), 6);
        for (i, turn) in history.iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(turn.role, expected);
        }
        assert_eq!(history[4].content, "q3");
        assert_eq!(history[5].content, "answer 3");
    }

    #[tokio::test]
    async fn test_each_call_carries_entire_history() {
        let model = ScriptedModel::answering(2);
        let mut session = Session::new("system".to_string(), model.clone());
        session.ask("q1").await.unwrap();
        session.ask("q2").await.unwrap();

        let calls = model.calls();
        assert_eq!(calls[0], vec![Turn::user("q1")]);
        assert_eq!(
            calls[1],
            vec![Turn::user("q1"), Turn::assistant("answer 1"), Turn::user("q2")]
        );
    }

    #[tokio::test]
    async fn test_failed_turn_is_rolled_back() {
        let model = ScriptedModel::new(vec![
            Ok("answer 1".to_string()),
            Err(LlmError::Api {
                status: 500,
                message: "boom".to_string(),
            }),
            Ok("answer 3".to_string()),
        ]);
        let mut session = Session::new("system".to_string(), model.clone());

        session.ask("q1").await.unwrap();
        assert!(session.ask("q2").await.is_err());
        assert_eq!(session.history().len(), 2);

        session.ask("q3").await.unwrap();
        let calls = model.calls();
        assert_eq!(
            calls[2],
            vec![Turn::user("q1"), Turn::assistant("answer 1"), Turn::user("q3")]
        );
        assert_eq!(session.history().len(), 4);
    }

    #[tokio::test]
    async fn test_commands_never_reach_model() {
        let model = ScriptedModel::answering(0);
        let (result, output) = run_script(
            model.clone(),
            "\n\nexamples\nprofile\nchange mode\nchange style\nEXAMPLES\nexit\n",
        )
        .await;

        assert!(result.is_ok());
        assert!(model.calls().is_empty());
        assert!(output.contains("INTRODUCTION:"));
        assert!(output.contains("Tell me about yourself"));
        assert!(output.contains("Restart the agent to change them"));
        assert!(output.contains("Good luck with your interviews!"));
    }

    #[tokio::test]
    async fn test_questions_are_forwarded_and_answered() {
        let model = ScriptedModel::answering(2);
        let (result, output) = run_script(
            model.clone(),
            "2\n3\nTell me about yourself\n\nWhat's your notice period?\nexit\n",
        )
        .await;

        assert!(result.is_ok());
        assert!(output.contains("Mode: technical-recruiter"));
        assert!(output.contains("Style: star"));
        assert!(output.contains("SUGGESTED ANSWER"));
        assert!(output.contains("answer 2"));

        let calls = model.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].len(), 3);
        assert_eq!(calls[1][2].content, "What's your notice period?");
    }

    #[tokio::test]
    async fn test_profile_command_prints_values_without_touching_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut profile: serde_json::Value =
            serde_json::from_str(include_str!("../hr-data/profile.json")).unwrap();
        profile["personalInfo"]["fullName"] = "A".into();
        profile["compensation"]["currentCTC"]["displayValue"] = "₹8.625 LPA".into();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, profile.to_string()).unwrap();

        colored::control::set_override(false);
        let model = ScriptedModel::answering(2);
        let mut out = Vec::new();
        run(
            &path,
            model.clone(),
            BufReadLines::new(Cursor::new("\n\nfirst question\nprofile\nsecond question\nexit\n")),
            &mut out,
        )
        .await
        .unwrap();
        let output = String::from_utf8(out).unwrap();

        let summary = &output[output.find("Profile Summary").unwrap()..];
        assert!(summary.contains("Name: A\n"));
        assert!(summary.contains("Current CTC: ₹8.625 LPA"));

        // history length seen by the second call is unaffected by `profile`
        let calls = model.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].len(), 3);
    }

    #[tokio::test]
    async fn test_missing_profile_fails_before_prompts() {
        colored::control::set_override(false);
        let model = ScriptedModel::answering(0);
        let mut out = Vec::new();
        let result = run(
            Path::new("/no/such/dir/profile.json"),
            model.clone(),
            BufReadLines::new(Cursor::new("1\n2\nexit\n")),
            &mut out,
        )
        .await;

        assert!(result.is_err());
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Select interview mode"));
        assert!(!output.contains("Select response style"));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_credential_failure_ends_session_with_error() {
        let model = ScriptedModel::new(vec![Err(LlmError::MissingCredential)]);
        let (result, output) = run_script(model.clone(), "\n\nhello\nnever asked\n").await;

        assert!(result.is_err());
        assert!(output.contains("ANTHROPIC_API_KEY"));
        assert_eq!(model.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_other_failures_keep_session_running() {
        let model = ScriptedModel::new(vec![
            Err(LlmError::Api {
                status: 529,
                message: "overloaded".to_string(),
            }),
            Ok("recovered".to_string()),
        ]);
        let (result, output) = run_script(model.clone(), "\n\nq1\nq2\nexit\n").await;

        assert!(result.is_ok());
        assert!(output.contains("overloaded"));
        assert!(output.contains("recovered"));
        assert_eq!(model.calls()[1], vec![Turn::user("q2")]);
    }

    #[tokio::test]
    async fn test_non_text_reply_is_reported_and_not_kept() {
        let model = ScriptedModel::new(vec![Err(LlmError::EmptyContent), Ok("second".to_string())]);
        let (result, output) = run_script(model.clone(), "\n\nq1\nq2\nexit\n").await;

        assert!(result.is_ok());
        assert!(output.contains("error: LLM returned empty content"));
        assert!(!output.contains("Unable to generate response"));
        assert_eq!(model.calls()[1], vec![Turn::user("q2")]);
    }

    /// Scripted input that also records what the loop keeps for recall.
    struct RecallingLines {
        inner: BufReadLines<Cursor<String>>,
        kept: Vec<String>,
    }

    impl LineSource for RecallingLines {
        fn read_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<Option<String>> {
            self.inner.read_line(prompt, out)
        }

        fn remember(&mut self, line: &str) {
            self.kept.push(line.to_string());
        }
    }

    #[tokio::test]
    async fn test_loop_lines_kept_for_recall_but_not_menu_choices() {
        colored::control::set_override(false);
        let mut input = RecallingLines {
            inner: BufReadLines::new(Cursor::new(
                "2\n1\nWhy this company?\n\nprofile\nexit\n".to_string(),
            )),
            kept: Vec::new(),
        };
        let mut out = Vec::new();
        run(&profile_path(), ScriptedModel::answering(1), &mut input, &mut out)
            .await
            .unwrap();

        assert_eq!(input.kept, vec!["Why this company?", "profile", "exit"]);
    }

    #[tokio::test]
    async fn test_end_of_input_ends_session_cleanly() {
        let model = ScriptedModel::answering(0);
        let (result, _) = run_script(model, "").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_defaults_when_choices_blank_or_invalid() {
        let model = ScriptedModel::answering(0);
        let (_, output) = run_script(model, "abc\nx\nexit\n").await;
        assert!(output.contains("Mode: general"));
        assert!(output.contains("Style: detailed"));
    }
}
