use clap::Parser;

/// Arguments for the split command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Split out everything reachable from one page:\n    dilu split --enter src/pages/home/index.tsx\n\n\
                  Name the new project:\n    dilu split -e src/main.ts -n checkout\n\n\
                  Write the project somewhere else:\n    dilu split -e src/main.ts -n checkout -o ../extracted\n\n\
                  Defaults for every option can live in dilu-cli.config.json under \"split\".")]
pub struct SplitArgs {
    /// Entry file the dependency graph is built from, relative to the workspace
    #[arg(
        long,
        short = 'e',
        value_name = "PATH",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub enter: String,

    /// Name of the new project folder (defaults to dilu-cli_split_<timestamp>)
    #[arg(long, short = 'n', visible_alias = "projectName", value_name = "NAME")]
    pub project_name: Option<String>,

    /// Directory the project folder is created in (defaults to the workspace)
    #[arg(long, short = 'o', visible_alias = "outputDir", value_name = "PATH")]
    pub output_dir: Option<String>,
}
