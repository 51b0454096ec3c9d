//! The terminal widget's state machine.
//!
//! [`Console`] ties the interpreter, the transcript, the rain engine and
//! the preference store together and implements the open / hide / pause
//! lifecycle. It is generic over a [`Platform`] so the same code runs
//! against browser adapters in the page and recording fakes in tests.

use tracing::debug;

use crate::config::{
    CORNER_NOTE, DEFAULT_GREETING, MAX_COMMAND_HISTORY, MAX_TERMINAL_HISTORY, REPLAY_COMMAND,
    WELCOME_SUFFIX,
};
use crate::core::commands::{Command, Effect, PendingTask, execute_command};
use crate::core::host::{Clock, ShellHost};
use crate::core::prefs::{PreferenceStore, Preferences};
use crate::core::rain::{
    EngineEvent, RainEngine, RainParams, Scheduler, SoundSettings, Surface, Tick, ToneSink,
};
use crate::core::transcript::{CommandHistory, Transcript};
use crate::models::{OutputLine, SessionState, ShellFlavor, Visibility};

/// The set of host implementations a console runs on.
pub trait Platform {
    type Surface: Surface;
    type Scheduler: Scheduler;
    type Tones: ToneSink;
    type Store: PreferenceStore;
    type Clock: Clock;
}

pub type Engine<P> =
    RainEngine<<P as Platform>::Surface, <P as Platform>::Scheduler, <P as Platform>::Tones>;

pub struct Console<P: Platform> {
    session: SessionState,
    transcript: Transcript,
    history: CommandHistory,
    rain: Engine<P>,
    store: P::Store,
    clock: P::Clock,
    greeting: Option<&'static str>,
    last_updated: Option<String>,
}

impl<P: Platform> Console<P> {
    /// Build a console and restore persisted preferences.
    pub fn new(flavor: ShellFlavor, mut rain: Engine<P>, store: P::Store, clock: P::Clock) -> Self {
        let prefs = Preferences::load(&store);
        rain.set_sound(prefs.sound);

        let mut session = SessionState::new(flavor);
        session.hidden = prefs.hidden;

        let mut console = Self {
            session,
            transcript: Transcript::new(MAX_TERMINAL_HISTORY),
            history: CommandHistory::new(MAX_COMMAND_HISTORY),
            rain,
            store,
            clock,
            greeting: None,
            last_updated: None,
        };
        console.sync_frozen();
        console
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    pub fn top_line(&self) -> String {
        self.session.top_line()
    }

    pub fn visibility(&self) -> Visibility {
        self.session.visibility()
    }

    pub fn sound(&self) -> SoundSettings {
        self.rain.sound()
    }

    pub fn rain(&self) -> &Engine<P> {
        &self.rain
    }

    /// When the transcript was last stamped, as shown next to the title.
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn now_label(&self) -> String {
        self.clock.now_label()
    }

    /// Greeting plus welcome suffix.
    pub fn welcome_line(&self) -> String {
        format!(
            "{} — {}",
            self.greeting.unwrap_or(DEFAULT_GREETING),
            WELCOME_SUFFIX
        )
    }

    /// Text for the corner badge: a teaser until the locale is known.
    pub fn corner_note(&self) -> String {
        match self.greeting {
            Some(_) => self.welcome_line(),
            None => CORNER_NOTE.to_string(),
        }
    }

    pub fn set_greeting(&mut self, greeting: &'static str) {
        self.greeting = Some(greeting);
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Echo and run a line, applying any state effect right away.
    ///
    /// Returns the network-bound remainder, if any, whose lines should be
    /// passed to [`Console::append`] once it resolves. Blank input does
    /// nothing.
    pub fn submit(&mut self, raw: &str) -> Option<PendingTask> {
        let cmd = Command::parse(raw)?;
        let line = raw.trim();

        self.history.record(line);
        self.transcript
            .push(OutputLine::command(self.session.prompt(), line));

        let result = execute_command(cmd, &mut self.session, &self.clock);
        self.transcript.extend(result.output);
        if let Some(effect) = result.effect {
            self.apply(effect);
        }
        result.pending
    }

    /// Append the lines a [`PendingTask`] produced.
    pub fn append(&mut self, lines: Vec<OutputLine>) {
        self.transcript.extend(lines);
    }

    /// Submit and await in one step, for callers that can hold the console
    /// across the await.
    pub async fn execute<H: ShellHost>(&mut self, raw: &str, host: &H) {
        if let Some(task) = self.submit(raw) {
            let lines = task.run(host).await;
            self.append(lines);
        }
    }

    /// Re-run the demo listing. Ignored while hidden.
    pub fn replay(&mut self) -> Option<PendingTask> {
        if self.session.hidden {
            return None;
        }
        self.submit(REPLAY_COMMAND)
    }

    /// Open the terminal, echo `label` and start an animation, as the
    /// quick-action buttons do.
    pub fn quick_rain(&mut self, label: &str, duration_ms: u32, params: RainParams) {
        self.open();
        self.transcript
            .push(OutputLine::command(self.session.prompt(), label));
        self.apply(Effect::StartRain {
            duration_ms,
            params,
        });
    }

    /// Previous history entry for the input field.
    pub fn history_previous(&mut self) -> Option<String> {
        self.history.previous().map(str::to_string)
    }

    /// Next history entry for the input field.
    pub fn history_next(&mut self) -> Option<String> {
        self.history.next().map(str::to_string)
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartRain {
                duration_ms,
                params,
            } => {
                let events = self.rain.start(duration_ms, params);
                self.absorb(events);
            }
            Effect::Clear => {
                self.rain.stop();
                self.transcript.clear();
            }
            Effect::Exit => self.hide(),
        }
    }

    // -------------------------------------------------------------------------
    // Animation
    // -------------------------------------------------------------------------

    /// Forward a fired frame or timer to the rain engine. Returns `true`
    /// when the transcript or timestamp changed.
    pub fn handle_tick(&mut self, tick: Tick) -> bool {
        let events = self.rain.handle(tick);
        let changed = !events.is_empty();
        self.absorb(events);
        changed
    }

    fn absorb(&mut self, events: Vec<EngineEvent>) {
        for event in events {
            match event {
                EngineEvent::Notice(text) => self.transcript.push(OutputLine::info(text)),
                EngineEvent::Failed(text) => self.transcript.push(OutputLine::error(text)),
                EngineEvent::Finished => self.touch(),
            }
        }
    }

    fn touch(&mut self) {
        self.last_updated = Some(self.clock.now_label());
    }

    fn sync_frozen(&mut self) {
        self.rain.set_frozen(self.session.frozen());
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Reveal the prompt. The very first open of the page prints the
    /// greeting. Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        if self.visibility() == Visibility::Open {
            return false;
        }
        self.session.opened = true;
        self.session.hidden = false;
        Preferences::save_hidden(&mut self.store, false);
        self.sync_frozen();

        if !self.session.welcomed {
            self.session.welcomed = true;
            self.transcript.push(OutputLine::banner(self.welcome_line()));
            self.touch();
        }

        let top_line = self.session.top_line();
        let prompt = self.session.prompt();
        if !self.transcript.iter().any(|l| l.content() == top_line) {
            self.transcript.push(OutputLine::info(top_line));
        }
        if !self.transcript.iter().any(|l| l.content() == prompt) {
            self.transcript.push(OutputLine::text(prompt));
        }
        debug!("terminal opened");
        true
    }

    /// Stop the animation, persist the hidden flag and show the closed
    /// placeholder.
    pub fn hide(&mut self) {
        self.rain.stop();
        self.session.hidden = true;
        self.session.opened = false;
        Preferences::save_hidden(&mut self.store, true);
        self.sync_frozen();
        debug!("terminal hidden");
    }

    pub fn toggle_hidden(&mut self) {
        if self.session.hidden {
            self.open();
        } else {
            self.hide();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.session.paused = !self.session.paused;
        self.sync_frozen();
    }

    pub fn toggle_sound(&mut self) {
        let mut sound = self.rain.sound();
        sound.enabled = !sound.enabled;
        self.rain.set_sound(sound);
        Preferences::save_sound_enabled(&mut self.store, sound.enabled);
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &P::Store {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::animation::COMPLETION_MESSAGE;
    use crate::config::prefs::{HIDDEN_KEY, SOUND_ENABLED_KEY};
    use crate::core::commands::{REMOTE_UNREACHABLE, Registry};
    use crate::core::error::FetchError;
    use crate::core::host::testing::{FakeHost, FixedClock};
    use crate::core::prefs::MemoryStore;
    use crate::core::rain::RecordingSink;
    use crate::core::rain::testing::{self, FakeScheduler, FakeSurface};
    use crate::models::OutputLineData;

    struct TestPlatform;

    impl Platform for TestPlatform {
        type Surface = FakeSurface;
        type Scheduler = FakeScheduler;
        type Tones = RecordingSink;
        type Store = MemoryStore;
        type Clock = FixedClock;
    }

    const NOW: &str = "19/10/2026, 14:05";

    fn console_with(store: MemoryStore) -> (Console<TestPlatform>, FakeSurface, FakeScheduler) {
        let (engine, surface, scheduler) = testing::engine(320.0, 140.0);
        let console = Console::new(ShellFlavor::Posix, engine, store, FixedClock(NOW));
        (console, surface, scheduler)
    }

    fn console() -> (Console<TestPlatform>, FakeSurface, FakeScheduler) {
        console_with(MemoryStore::default())
    }

    /// Step the fake clock and deliver every tick.
    fn run(console: &mut Console<TestPlatform>, clock: &FakeScheduler, total_ms: f64) {
        let mut elapsed = 0.0;
        while elapsed < total_ms {
            for tick in clock.step(16.0) {
                console.handle_tick(tick);
            }
            elapsed += 16.0;
        }
    }

    fn contents(console: &Console<TestPlatform>) -> Vec<String> {
        console
            .transcript()
            .iter()
            .map(|l| l.content().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_blank_input_adds_nothing() {
        let (mut console, _, _) = console();
        let host = FakeHost::default();
        console.execute("", &host).await;
        console.execute("   \t  ", &host).await;
        assert!(console.transcript().is_empty());
        assert!(console.submit("  ").is_none());
    }

    #[tokio::test]
    async fn test_help_end_to_end() {
        let (mut console, _, _) = console();
        console.execute("help", &FakeHost::default()).await;

        let lines: Vec<_> = console.transcript().iter().collect();
        assert_eq!(lines.len(), 2 + Registry::builtin().len());
        assert_eq!(
            lines[0].data,
            OutputLineData::Command {
                prompt: "└──╼ ~ $".to_string(),
                input: "help".to_string()
            }
        );
        assert_eq!(lines[1].content(), "Comandos conhecidos:");
    }

    #[tokio::test]
    async fn test_cmatrix_end_to_end() {
        let (mut console, surface, clock) = console();
        console.execute("cmatrix", &FakeHost::default()).await;

        assert_eq!(
            contents(&console),
            vec!["cmatrix", "cmatrix: iniciando efeito (local)..."]
        );
        let session = console.rain().session().unwrap();
        assert_eq!(session.duration_ms, 12000);
        assert_eq!(session.params, RainParams::intensified());
        assert!(console.last_updated().is_none());

        run(&mut console, &clock, 12100.0);
        assert!(!console.rain().is_active());
        assert_eq!(surface.texts(), vec![COMPLETION_MESSAGE.to_string()]);
        assert_eq!(console.last_updated(), Some(NOW));
        assert_eq!(clock.pending_frames(), 0);
    }

    #[tokio::test]
    async fn test_second_animation_replaces_first() {
        let (mut console, _, clock) = console();
        let host = FakeHost::default();
        console.execute("curl", &host).await;
        console.execute("cmatrix", &host).await;
        assert_eq!(clock.pending_frames(), 1);
        assert_eq!(clock.pending_timers().len(), 1);
    }

    #[tokio::test]
    async fn test_remote_timeout_is_one_line() {
        let (mut console, _, _) = console();
        let host = FakeHost {
            remote: Err(FetchError::Timeout),
            ..Default::default()
        };
        console.execute("uptime", &host).await;
        assert_eq!(contents(&console), vec!["uptime", REMOTE_UNREACHABLE]);
        assert_eq!(host.remote_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_builtins_never_reach_remote() {
        let (mut console, _, _) = console();
        let host = FakeHost::default();
        for line in ["ls", "DIR", "help", "cat", "scripts", "cd /"] {
            console.execute(line, &host).await;
        }
        assert_eq!(host.remote_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_unknown_without_remote() {
        let (mut console, _, _) = console();
        console.execute("foobar", &FakeHost::default()).await;
        assert_eq!(contents(&console), vec!["foobar", "foobar: comando não encontrado"]);
    }

    #[tokio::test]
    async fn test_cd_changes_next_prompt() {
        let (mut console, _, _) = console();
        let host = FakeHost::default();
        console.execute("cd projetos", &host).await;
        console.execute("ls", &host).await;
        let echoes: Vec<_> = console
            .transcript()
            .iter()
            .filter_map(|l| match &l.data {
                OutputLineData::Command { prompt, .. } => Some(prompt.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(echoes, vec!["└──╼ ~ $", "└──╼ projetos $"]);
        assert_eq!(console.top_line(), "┌─[root@Jerr]─[projetos]");
    }

    #[test]
    fn test_submit_splits_sync_and_async() {
        let (mut console, _, _) = console();
        let task = console.submit("ifconfig").unwrap();
        assert_eq!(contents(&console), vec!["ifconfig", "Obtendo IP público..."]);
        assert_eq!(
            task,
            PendingTask::PublicIp {
                flavor: ShellFlavor::Posix
            }
        );
        console.append(vec![OutputLine::text("inet addr: 203.0.113.7")]);
        assert_eq!(console.transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_clear_wipes_transcript_and_animation() {
        let (mut console, surface, clock) = console();
        let host = FakeHost::default();
        console.execute("curl", &host).await;
        run(&mut console, &clock, 200.0);
        console.execute("clear", &host).await;

        assert!(console.transcript().is_empty());
        assert!(!console.rain().is_active());
        assert!(!surface.visible());
        assert_eq!(clock.pending_frames(), 0);
    }

    #[tokio::test]
    async fn test_exit_hides_and_persists() {
        let (mut console, surface, clock) = console();
        let host = FakeHost::default();
        console.open();
        console.execute("curl", &host).await;
        console.execute("exit", &host).await;

        assert_eq!(contents(&console).last().unwrap(), "Saindo do terminal...");
        assert_eq!(console.visibility(), Visibility::Closed);
        assert!(console.session().hidden);
        assert!(!console.rain().is_active());
        assert!(!surface.visible());
        assert!(clock.pending_timers().is_empty());
        assert_eq!(console.store().get(HIDDEN_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn test_first_open_greets_once() {
        let (mut console, _, _) = console();
        console.set_greeting("Olá!_eu_Sou_Jerr");
        assert!(console.open());
        assert!(!console.open());

        let lines = contents(&console);
        assert_eq!(
            lines,
            vec![
                "Olá!_eu_Sou_Jerr — Bem-vindo ao meu portfólio.",
                "┌─[root@Jerr]─[~]",
                "└──╼ ~ $",
            ]
        );
        assert_eq!(console.last_updated(), Some(NOW));
        assert_eq!(console.store().get(HIDDEN_KEY).as_deref(), Some("0"));

        console.hide();
        assert!(console.open());
        assert_eq!(contents(&console).len(), 3);
    }

    #[test]
    fn test_corner_note_follows_greeting() {
        let (mut console, _, _) = console();
        assert_eq!(console.corner_note(), CORNER_NOTE);
        console.set_greeting("Hello!_I_am_Jerr");
        assert_eq!(console.corner_note(), "Hello!_I_am_Jerr — Bem-vindo ao meu portfólio.");
    }

    #[test]
    fn test_restores_preferences() {
        let store = MemoryStore::with(&[(HIDDEN_KEY, "1"), (SOUND_ENABLED_KEY, "0")]);
        let (console, _, _) = console_with(store);
        assert!(console.session().hidden);
        assert_eq!(console.visibility(), Visibility::Closed);
        assert!(!console.sound().enabled);
        assert!(console.rain().is_frozen());
    }

    #[test]
    fn test_toggle_hidden() {
        let (mut console, _, _) = console();
        console.toggle_hidden();
        assert!(console.session().hidden);
        console.toggle_hidden();
        assert_eq!(console.visibility(), Visibility::Open);
    }

    #[test]
    fn test_pause_freezes_without_stopping() {
        let (mut console, surface, clock) = console();
        console.open();
        console.submit("curl");
        run(&mut console, &clock, 100.0);

        console.toggle_pause();
        assert!(console.rain().is_frozen());
        let drawn = surface.glyphs_drawn();
        run(&mut console, &clock, 500.0);
        assert_eq!(surface.glyphs_drawn(), drawn);
        assert!(console.rain().is_active());

        console.toggle_pause();
        run(&mut console, &clock, 100.0);
        assert!(surface.glyphs_drawn() > drawn);
    }

    #[test]
    fn test_commands_still_run_while_paused() {
        let (mut console, _, _) = console();
        console.toggle_pause();
        console.submit("whoami");
        assert!(console.transcript().len() > 1);
    }

    #[test]
    fn test_toggle_sound_persists() {
        let (mut console, _, _) = console();
        assert!(console.sound().enabled);
        console.toggle_sound();
        assert!(!console.sound().enabled);
        assert_eq!(console.store().get(SOUND_ENABLED_KEY).as_deref(), Some("0"));
        console.toggle_sound();
        assert_eq!(console.store().get(SOUND_ENABLED_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn test_replay_ignored_when_hidden() {
        let (mut console, _, _) = console();
        console.hide();
        assert!(console.replay().is_none());
        assert!(console.transcript().is_empty());

        console.open();
        let before = console.transcript().len();
        console.replay();
        let after = contents(&console);
        assert_eq!(after[before], "ls -la");
        assert!(after[before + 1].starts_with("-- Saída em:"));
    }

    #[test]
    fn test_quick_rain_opens_and_starts() {
        let (mut console, _, _) = console();
        console.quick_rain("curl", 7000, RainParams::standard());
        assert_eq!(console.visibility(), Visibility::Open);
        assert_eq!(contents(&console).last().unwrap(), "curl");
        assert_eq!(console.rain().session().unwrap().duration_ms, 7000);
    }

    #[test]
    fn test_tiny_surface_reports_failure() {
        let (mut console, surface, clock) = console();
        surface.resize(5.0, 5.0);
        console.submit("curl");
        run(&mut console, &clock, 5000.0);
        let lines = contents(&console);
        assert_eq!(
            lines,
            vec![
                "curl",
                "curl: iniciando animação...",
                "Aguardando renderização do terminal...",
                "Erro: não foi possível inicializar a animação (área muito pequena).",
            ]
        );
    }

    #[test]
    fn test_history_navigation() {
        let (mut console, _, _) = console();
        console.submit("ls");
        console.submit("whoami");
        assert_eq!(console.history_previous().as_deref(), Some("whoami"));
        assert_eq!(console.history_previous().as_deref(), Some("ls"));
        assert_eq!(console.history_next().as_deref(), Some("whoami"));
    }
}
