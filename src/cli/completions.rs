use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    dilu completions bash > ~/.bash_completion.d/dilu\n\n\
                  Generate zsh completions:\n    dilu completions zsh > ~/.zfunc/_dilu\n\n\
                  Generate fish completions:\n    dilu completions fish > ~/.config/fish/completions/dilu.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
