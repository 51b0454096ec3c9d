//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the session and returns results.

use crate::config::animation::{CMATRIX_DURATION_MS, CURL_DURATION_MS};
use crate::config::{CONTACT_TEXT, HOME_PATH, LISTING_TEXT, PROFILE_TEXT, PROJECTS};
use crate::core::host::Clock;
use crate::core::rain::RainParams;
use crate::core::scripts::ScriptLibrary;
use crate::models::{OutputLine, SessionState};

use super::registry::Registry;
use super::{Command, CommandResult, Effect, PathArg, PendingTask};

/// Execute a parsed command.
///
/// Only `cd` mutates the session here; `clear`, `exit` and the animations
/// are returned as an [`Effect`] for the console to apply, and network
/// work is returned as a [`PendingTask`].
pub fn execute_command(cmd: Command, session: &mut SessionState, clock: &impl Clock) -> CommandResult {
    match cmd {
        Command::Help => execute_help(Registry::builtin()),
        Command::Ls => {
            let mut lines = vec![OutputLine::info(format!("-- Saída em: {} --", clock.now_label()))];
            lines.extend(LISTING_TEXT.lines().map(OutputLine::text));
            CommandResult::output(lines)
        }
        Command::Cd(target) => execute_cd(target, session),
        Command::Ifconfig => CommandResult::deferred(
            vec![OutputLine::info("Obtendo IP público...")],
            PendingTask::PublicIp {
                flavor: session.flavor,
            },
        ),
        Command::Curl => CommandResult::with_effect(
            vec![OutputLine::success("curl: iniciando animação...")],
            Effect::StartRain {
                duration_ms: CURL_DURATION_MS,
                params: RainParams::standard(),
            },
        ),
        Command::Cmatrix => CommandResult::with_effect(
            vec![OutputLine::success("cmatrix: iniciando efeito (local)...")],
            Effect::StartRain {
                duration_ms: CMATRIX_DURATION_MS,
                params: RainParams::intensified(),
            },
        ),
        Command::SudoCmatrix => CommandResult::output(vec![
            OutputLine::info("Para instalar cmatrix no seu sistema local rode: sudo apt -y install cmatrix"),
            OutputLine::info("Dica: digite `cmatrix` aqui para ver o efeito de matrix nesta página."),
        ]),
        Command::Clear => CommandResult::with_effect(vec![], Effect::Clear),
        Command::Exit => CommandResult::with_effect(
            vec![OutputLine::text("Saindo do terminal...")],
            Effect::Exit,
        ),
        Command::Whoami => CommandResult::output(PROFILE_TEXT.lines().map(OutputLine::text).collect()),
        Command::Projects => execute_projects(),
        Command::Contact => {
            let mut lines = vec![OutputLine::info("Contato:")];
            lines.extend(CONTACT_TEXT.lines().map(OutputLine::text));
            CommandResult::output(lines)
        }
        Command::Scripts => execute_scripts(ScriptLibrary::builtin()),
        Command::Cat(target) => execute_cat(target, ScriptLibrary::builtin()),
        Command::Unknown { key, line } => {
            CommandResult::deferred(vec![], PendingTask::Remote { line, key })
        }
    }
}

fn execute_help(registry: &Registry) -> CommandResult {
    let mut lines = vec![OutputLine::info("Comandos conhecidos:")];
    lines.extend(
        registry
            .iter()
            .map(|spec| OutputLine::text(format!("- {}: {}", spec.label(), spec.description))),
    );
    CommandResult::output(lines)
}

/// `..` and `/` go to the root, `~` goes home, anything else becomes the
/// path with every `/` removed.
fn execute_cd(target: PathArg, session: &mut SessionState) -> CommandResult {
    session.current_path = match target.as_str() {
        ".." | "/" => "/".to_string(),
        HOME_PATH => HOME_PATH.to_string(),
        other => other.replace('/', ""),
    };
    CommandResult::output(vec![OutputLine::text(format!(
        "Diretório agora: {}",
        session.current_path
    ))])
}

fn execute_projects() -> CommandResult {
    let mut lines = vec![OutputLine::info("Projetos em destaque:")];
    for project in PROJECTS {
        lines.push(OutputLine::text(format!(
            "• {} — {}",
            project.title, project.description
        )));
        if let Some(reference) = project.reference {
            lines.push(OutputLine::text(format!("  Referência: {}", reference)));
        }
    }
    CommandResult::output(lines)
}

fn execute_scripts(library: ScriptLibrary) -> CommandResult {
    let mut lines = vec![OutputLine::info("Scripts demonstrativos disponíveis:")];
    lines.extend(library.iter().map(|entry| {
        OutputLine::text(format!(
            "- {}: {} ({})",
            entry.key, entry.title, entry.description
        ))
    }));
    lines.push(OutputLine::info("Use cat <script> para visualizar o conteúdo."));
    CommandResult::output(lines)
}

fn execute_cat(target: Option<PathArg>, library: ScriptLibrary) -> CommandResult {
    let Some(target) = target else {
        return CommandResult::output(vec![OutputLine::error(
            "cat: uso: cat <script>. Digite scripts para ver as opções.",
        )]);
    };

    match library.resolve(target.as_str()) {
        Some(entry) => {
            let mut lines = vec![OutputLine::banner(format!("--- {} ---", entry.title))];
            lines.extend(entry.content.lines().map(OutputLine::text));
            lines.push(OutputLine::banner(format!("--- fim {} ---", entry.title)));
            CommandResult::output(lines)
        }
        None => CommandResult::output(vec![OutputLine::error(format!(
            "cat: {}: arquivo não encontrado (digite scripts para a lista).",
            target
        ))]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::testing::FixedClock;
    use crate::models::ShellFlavor;

    const CLOCK: FixedClock = FixedClock("19/10/2026, 14:05");

    fn run(line: &str) -> (CommandResult, SessionState) {
        let mut session = SessionState::new(ShellFlavor::Posix);
        let cmd = Command::parse(line).unwrap();
        (execute_command(cmd, &mut session, &CLOCK), session)
    }

    fn texts(result: &CommandResult) -> Vec<&str> {
        result.output.iter().map(|l| l.content()).collect()
    }

    #[test]
    fn test_help_lists_every_command_in_order() {
        let (result, _) = run("help");
        let lines = texts(&result);
        assert_eq!(lines[0], "Comandos conhecidos:");
        assert_eq!(lines.len(), 1 + Registry::builtin().len());
        assert_eq!(lines[1], "- help/ajuda/commands: Lista comandos disponíveis");
        assert!(lines.last().unwrap().starts_with("- cat/view:"));
    }

    #[test]
    fn test_ls_header_then_listing() {
        let (result, _) = run("ls -la");
        let lines = texts(&result);
        assert_eq!(lines[0], "-- Saída em: 19/10/2026, 14:05 --");
        assert_eq!(lines.len(), 1 + LISTING_TEXT.lines().count());
        assert!(result.effect.is_none());
    }

    #[test]
    fn test_aliases_reach_same_handler() {
        let (ls, _) = run("ls");
        let (upper, _) = run("LS");
        let (dir, _) = run("Dir");
        assert_eq!(ls.output, upper.output);
        assert_eq!(ls.output, dir.output);
    }

    #[test]
    fn test_cd_semantics() {
        assert_eq!(run("cd ..").1.current_path, "/");
        assert_eq!(run("cd /").1.current_path, "/");
        assert_eq!(run("cd").1.current_path, "~");
        assert_eq!(run("cd ~").1.current_path, "~");
        assert_eq!(run("cd foo/bar").1.current_path, "foobar");
        assert_eq!(run("cd /foo/").1.current_path, "foo");
        assert_eq!(run(r"cd foo\bar").1.current_path, r"foo\bar");

        let (result, session) = run("cd projetos");
        assert_eq!(texts(&result), vec!["Diretório agora: projetos"]);
        assert_eq!(session.prompt(), "└──╼ projetos $");
    }

    #[test]
    fn test_ifconfig_defers_lookup() {
        let (result, _) = run("ipconfig");
        assert_eq!(texts(&result), vec!["Obtendo IP público..."]);
        assert_eq!(
            result.pending,
            Some(PendingTask::PublicIp {
                flavor: ShellFlavor::Posix
            })
        );
    }

    #[test]
    fn test_animation_effects() {
        let (curl, _) = run("curl");
        assert_eq!(
            curl.effect,
            Some(Effect::StartRain {
                duration_ms: 6000,
                params: RainParams::standard()
            })
        );
        let (cmatrix, _) = run("cmatrix");
        assert_eq!(texts(&cmatrix), vec!["cmatrix: iniciando efeito (local)..."]);
        assert_eq!(
            cmatrix.effect,
            Some(Effect::StartRain {
                duration_ms: 12000,
                params: RainParams::intensified()
            })
        );
    }

    #[test]
    fn test_sudo_cmatrix_does_not_animate() {
        let (result, _) = run("sudo apt install cmatrix");
        assert_eq!(result.output.len(), 2);
        assert!(result.effect.is_none());
        assert!(result.pending.is_none());
    }

    #[test]
    fn test_clear_and_exit_effects() {
        let (clear, _) = run("cls");
        assert!(clear.output.is_empty());
        assert_eq!(clear.effect, Some(Effect::Clear));

        let (exit, _) = run("exit");
        assert_eq!(texts(&exit), vec!["Saindo do terminal..."]);
        assert_eq!(exit.effect, Some(Effect::Exit));
    }

    #[test]
    fn test_projects_blocks() {
        let (result, _) = run("projetos");
        let lines = texts(&result);
        assert_eq!(lines[0], "Projetos em destaque:");
        let bullets = lines.iter().filter(|l| l.starts_with("• ")).count();
        assert_eq!(bullets, PROJECTS.len());
        let refs = lines.iter().filter(|l| l.starts_with("  Referência: ")).count();
        assert_eq!(refs, PROJECTS.iter().filter(|p| p.reference.is_some()).count());
    }

    #[test]
    fn test_contact_and_profile() {
        let (contact, _) = run("whatsapp");
        assert_eq!(texts(&contact)[0], "Contato:");
        assert_eq!(contact.output.len(), 1 + CONTACT_TEXT.lines().count());

        let (profile, _) = run("perfil");
        assert_eq!(profile.output.len(), PROFILE_TEXT.lines().count());
    }

    #[test]
    fn test_scripts_listing() {
        let (result, _) = run("scripts");
        let lines = texts(&result);
        let library = ScriptLibrary::builtin();
        assert_eq!(lines.len(), library.len() + 2);
        assert_eq!(
            lines[1],
            "- forensics-linux: collect_forensics_linux.sh (".to_string()
                + library.get("forensics-linux").unwrap().description
                + ")"
        );
        assert_eq!(*lines.last().unwrap(), "Use cat <script> para visualizar o conteúdo.");
    }

    #[test]
    fn test_cat_alias_and_key_match() {
        let (by_key, _) = run("cat forensics-linux");
        let (by_alias, _) = run("view collect_forensics_linux.sh");
        assert_eq!(by_key.output, by_alias.output);

        let lines = texts(&by_key);
        assert_eq!(lines[0], "--- collect_forensics_linux.sh ---");
        assert_eq!(*lines.last().unwrap(), "--- fim collect_forensics_linux.sh ---");
        assert_eq!(lines[1], "#!/bin/bash");
    }

    #[test]
    fn test_cat_usage_and_missing() {
        let (usage, _) = run("cat");
        assert_eq!(
            texts(&usage),
            vec!["cat: uso: cat <script>. Digite scripts para ver as opções."]
        );

        let (missing, _) = run("cat nonexistent");
        assert_eq!(
            texts(&missing),
            vec!["cat: nonexistent: arquivo não encontrado (digite scripts para a lista)."]
        );
    }

    #[test]
    fn test_unknown_defers_to_remote() {
        let (result, session) = run("Foobar  --x");
        assert!(result.output.is_empty());
        assert_eq!(
            result.pending,
            Some(PendingTask::Remote {
                line: "Foobar  --x".to_string(),
                key: "foobar".to_string()
            })
        );
        assert_eq!(session, SessionState::new(ShellFlavor::Posix));
    }

    #[test]
    fn test_read_only_commands_leave_session_alone() {
        for line in ["help", "ls", "whoami", "projects", "contact", "scripts", "cat block-ip"] {
            let (_, session) = run(line);
            assert_eq!(session, SessionState::new(ShellFlavor::Posix), "{}", line);
        }
    }
}
