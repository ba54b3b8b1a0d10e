use serde::Serialize;

/// Static descriptor of an Oh My Zsh plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plugin {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Example invocations, in display order.
    pub commands: &'static [&'static str],
    /// Manual setup command for plugins that don't ship with Oh My Zsh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation: Option<&'static str>,
}

pub const PLUGINS: &[Plugin] = &[
    Plugin {
        id: "git",
        name: "Git",
        description: "Provides many aliases and functions for Git workflow",
        commands: &["gst", "ga", "gcmsg", "gp"],
        installation: None,
    },
    Plugin {
        id: "docker",
        name: "Docker",
        description: "Adds auto-completion and aliases for Docker commands",
        commands: &["dk", "dkc", "dki", "dkps"],
        installation: None,
    },
    Plugin {
        id: "npm",
        name: "NPM",
        description: "Completion and aliases for npm commands",
        commands: &["npmg", "npmO", "npmL"],
        installation: None,
    },
    Plugin {
        id: "sudo",
        name: "Sudo",
        description: "Press ESC twice to add sudo to the current command",
        commands: &["ESC ESC"],
        installation: None,
    },
    Plugin {
        id: "z",
        name: "Z",
        description: "Jump to frequently visited directories",
        commands: &["z dirname"],
        installation: None,
    },
    Plugin {
        id: "history",
        name: "History",
        description: "Aliases for history command and searching",
        commands: &["h", "hs", "hsi"],
        installation: None,
    },
    Plugin {
        id: "extract",
        name: "Extract",
        description: "Extract any archive file with a single command",
        commands: &["x filename.tar.gz"],
        installation: None,
    },
    Plugin {
        id: "autojump",
        name: "Autojump",
        description: "Smart directory jumping using j command",
        commands: &["j dirname"],
        installation: None,
    },
    Plugin {
        id: "zsh-autosuggestions",
        name: "Autosuggestions",
        description: "Fish-like suggestions based on command history",
        commands: &["→ to accept"],
        installation: Some(
            "git clone https://github.com/zsh-users/zsh-autosuggestions ${ZSH_CUSTOM:-~/.oh-my-zsh/custom}/plugins/zsh-autosuggestions",
        ),
    },
    Plugin {
        id: "zsh-syntax-highlighting",
        name: "Syntax Highlighting",
        description: "Fish-like syntax highlighting for commands",
        commands: &["real-time highlighting"],
        installation: Some(
            "git clone https://github.com/zsh-users/zsh-syntax-highlighting.git ${ZSH_CUSTOM:-~/.oh-my-zsh/custom}/plugins/zsh-syntax-highlighting",
        ),
    },
];

pub fn find_plugin(id: &str) -> Option<&'static Plugin> {
    PLUGINS.iter().find(|plugin| plugin.id == id)
}
