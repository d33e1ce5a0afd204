use clap::Parser;
use miette::Result;
use showroom::cli::{logging, Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    logging::setup_tracing(global.verbose, global.quiet);

    match cli.command {
        Commands::Init(args) => showroom::cli::commands::init::run(args),
        Commands::Home(args) => showroom::cli::commands::home::run(args, &global),
        Commands::Vehicle(cmd) => showroom::cli::commands::vehicle::run(cmd, &global),
        Commands::Inquiry(cmd) => showroom::cli::commands::inquiry::run(cmd, &global),
        Commands::Preorder(cmd) => showroom::cli::commands::preorder::run(cmd, &global),
        Commands::Testimonial(cmd) => showroom::cli::commands::testimonial::run(cmd, &global),
        Commands::Hero(cmd) => showroom::cli::commands::hero::run(cmd, &global),
        Commands::Admin(args) => showroom::cli::commands::admin::run(args, &global),
        Commands::Store(cmd) => showroom::cli::commands::store::run(cmd, &global),
        Commands::Validate(args) => showroom::cli::commands::validate::run(args, &global),
        Commands::Config(cmd) => showroom::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => showroom::cli::commands::completions::run(args),
    }
}
