use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mediadesk", version)]
struct Cli {
    /// Directory holding the persisted project, recent files, and theme.
    #[arg(long, global = true, default_value = ".mediadesk")]
    store: PathBuf,

    /// Editor config JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log editor activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the media kind each file name routes to.
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Load a file, make it the active project, and save.
    Open(OpenArgs),
    /// Show the saved project, its properties, recent files, and theme.
    Status,
    /// List recent files, or remove one.
    Recent {
        /// File name to remove from the list.
        #[arg(long)]
        remove: Option<String>,
    },
    /// Show or toggle the theme.
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// List export formats for the saved project's file.
    ExportOptions,
    /// Keep the head of a video and save it as the active project.
    Cut(CutArgs),
    /// Discard the saved project.
    Reset,
}

#[derive(Parser, Debug)]
struct OpenArgs {
    /// File to load.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// MIME type to record for the file.
    #[arg(long)]
    mime: Option<String>,
}

#[derive(Parser, Debug)]
struct CutArgs {
    /// Input video.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Seconds to keep (overrides the config).
    #[arg(long)]
    seconds: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match &cli.cmd {
        Command::Classify { names } => cmd_classify(names),
        Command::Open(args) => cmd_open(&cli, args),
        Command::Status => cmd_status(&cli),
        Command::Recent { remove } => cmd_recent(&cli, remove.as_deref()),
        Command::Theme { toggle } => cmd_theme(&cli, *toggle),
        Command::ExportOptions => cmd_export_options(&cli),
        Command::Cut(args) => cmd_cut(&cli, args),
        Command::Reset => cmd_reset(&cli),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<mediadesk::EditorConfig> {
    match &cli.config {
        Some(path) => Ok(mediadesk::EditorConfig::from_path(path)?),
        None => Ok(mediadesk::EditorConfig::default()),
    }
}

fn open_editor_with(
    cli: &Cli,
    config: mediadesk::EditorConfig,
) -> anyhow::Result<mediadesk::Editor<mediadesk::DirStore>> {
    let store = mediadesk::DirStore::open(&cli.store)
        .with_context(|| format!("open store '{}'", cli.store.display()))?;
    mediadesk::Editor::open(config, store, mediadesk::Services::default()).with_context(|| {
        format!(
            "restore editor state from '{}' (run `mediadesk reset` to discard a corrupt project)",
            cli.store.display()
        )
    })
}

fn open_editor(cli: &Cli) -> anyhow::Result<mediadesk::Editor<mediadesk::DirStore>> {
    open_editor_with(cli, load_config(cli)?)
}

fn file_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' has no file name", path.display()))
}

fn load_into(
    editor: &mut mediadesk::Editor<mediadesk::DirStore>,
    path: &Path,
    mime: Option<&str>,
) -> anyhow::Result<(String, Vec<u8>)> {
    let name = file_name(path)?;
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    editor
        .load_file(&name, mime, &bytes)
        .with_context(|| format!("load '{name}'"))?;
    Ok((name, bytes))
}

fn cmd_classify(names: &[String]) -> anyhow::Result<()> {
    for name in names {
        println!("{name}\t{}", mediadesk::classify(name));
    }
    Ok(())
}

fn cmd_open(cli: &Cli, args: &OpenArgs) -> anyhow::Result<()> {
    let mut editor = open_editor(cli)?;
    let (name, _) = load_into(&mut editor, &args.in_path, args.mime.as_deref())?;
    editor.save(mediadesk::SaveMode::Explicit)?;
    println!("saved project \"{name}\"");
    println!("{}", editor.status());
    Ok(())
}

fn cmd_status(cli: &Cli) -> anyhow::Result<()> {
    let editor = open_editor(cli)?;
    println!("{}", editor.status());
    if let Some(props) = editor.properties() {
        println!("{props}");
    }
    println!("theme: {}", editor.theme());
    if editor.recent().is_empty() {
        println!("recent: (none)");
    } else {
        println!("recent:");
        for name in editor.recent() {
            println!("  {name}");
        }
    }
    Ok(())
}

fn cmd_recent(cli: &Cli, remove: Option<&str>) -> anyhow::Result<()> {
    let mut editor = open_editor(cli)?;
    if let Some(name) = remove {
        editor.remove_recent(name)?;
    }
    for name in editor.recent() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_theme(cli: &Cli, toggle: bool) -> anyhow::Result<()> {
    let mut editor = open_editor(cli)?;
    let theme = if toggle {
        editor.toggle_theme()?
    } else {
        editor.theme()
    };
    println!("{theme}");
    Ok(())
}

fn cmd_export_options(cli: &Cli) -> anyhow::Result<()> {
    let editor = open_editor(cli)?;
    let formats = editor.export_formats()?;
    println!("{}", formats.join(", "));
    Ok(())
}

fn cmd_cut(cli: &Cli, args: &CutArgs) -> anyhow::Result<()> {
    let mut config = load_config(cli)?;
    if let Some(seconds) = args.seconds {
        config.cut_seconds = seconds;
    }
    let mut editor = open_editor_with(cli, config)?;
    let (_, bytes) = load_into(&mut editor, &args.in_path, Some("video/mp4"))?;
    let out = editor.cut_video(&bytes)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &out)
        .with_context(|| format!("write '{}'", args.out.display()))?;
    editor.save(mediadesk::SaveMode::Explicit)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_reset(cli: &Cli) -> anyhow::Result<()> {
    let mut store = mediadesk::DirStore::open(&cli.store)
        .with_context(|| format!("open store '{}'", cli.store.display()))?;
    mediadesk::clear_project(&mut store)?;
    println!("project cleared");
    Ok(())
}
