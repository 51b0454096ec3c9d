//! Built-in command table with a case-insensitive alias index.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Which built-in a registry entry dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Ls,
    Cd,
    Ifconfig,
    Curl,
    Cmatrix,
    Clear,
    Exit,
    Whoami,
    Projects,
    Contact,
    Scripts,
    Cat,
}

/// One registered command: its primary name, aliases and help text.
#[derive(Clone, Copy, Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub kind: CommandKind,
}

impl CommandSpec {
    /// Name and aliases joined with `/`, as listed by `help`.
    pub fn label(&self) -> String {
        std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Registration order is the order `help` lists commands in.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        aliases: &["ajuda", "commands"],
        description: "Lista comandos disponíveis",
        kind: CommandKind::Help,
    },
    CommandSpec {
        name: "ls",
        aliases: &["dir"],
        description: "Mostra os arquivos simulados",
        kind: CommandKind::Ls,
    },
    CommandSpec {
        name: "cd",
        aliases: &[],
        description: "Muda o diretório atual",
        kind: CommandKind::Cd,
    },
    CommandSpec {
        name: "ifconfig",
        aliases: &["ipconfig"],
        description: "Exibe o IP público",
        kind: CommandKind::Ifconfig,
    },
    CommandSpec {
        name: "curl",
        aliases: &[],
        description: "Ativa o efeito Matrix com som",
        kind: CommandKind::Curl,
    },
    CommandSpec {
        name: "cmatrix",
        aliases: &[],
        description: "Efeito Matrix prolongado",
        kind: CommandKind::Cmatrix,
    },
    CommandSpec {
        name: "clear",
        aliases: &["cls"],
        description: "Limpa o terminal e a animação",
        kind: CommandKind::Clear,
    },
    CommandSpec {
        name: "exit",
        aliases: &[],
        description: "Oculta o terminal",
        kind: CommandKind::Exit,
    },
    CommandSpec {
        name: "whoami",
        aliases: &["profile", "perfil"],
        description: "Mostra meu perfil e foco profissional",
        kind: CommandKind::Whoami,
    },
    CommandSpec {
        name: "projects",
        aliases: &["projetos"],
        description: "Resumo dos projetos em destaque",
        kind: CommandKind::Projects,
    },
    CommandSpec {
        name: "contact",
        aliases: &["contato", "whatsapp"],
        description: "Formas de contato e WhatsApp",
        kind: CommandKind::Contact,
    },
    CommandSpec {
        name: "scripts",
        aliases: &[],
        description: "Lista os scripts forenses que podem ser abertos com cat",
        kind: CommandKind::Scripts,
    },
    CommandSpec {
        name: "cat",
        aliases: &["view"],
        description: "Mostra o conteúdo de um script (cat <script>)",
        kind: CommandKind::Cat,
    },
];

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| Registry::new(COMMANDS));

/// Ordered command table plus an index from every lowercase name/alias to
/// its entry.
#[derive(Debug)]
pub struct Registry {
    specs: &'static [CommandSpec],
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new(specs: &'static [CommandSpec]) -> Self {
        let mut index = HashMap::new();
        for (i, spec) in specs.iter().enumerate() {
            for name in std::iter::once(&spec.name).chain(spec.aliases) {
                index.entry(name.to_lowercase()).or_insert(i);
            }
        }
        Self { specs, index }
    }

    /// The shared table of built-in commands.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Look up a command key or alias, ignoring case.
    pub fn lookup(&self, key: &str) -> Option<&'static CommandSpec> {
        let specs = self.specs;
        self.index
            .get(&key.to_lowercase())
            .map(|&i| &specs[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'static, CommandSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }
}
