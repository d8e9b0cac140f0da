use std::{
    io::{self, BufRead, Write},
    rc::Rc,
};

use barbell_rs::{
    bar::Bar,
    command::{Command, HELP},
    configuration::Configuration,
    controller::Controller,
    render::{catalog_line, render},
    theme::{AmbientTheme, Theme},
    unit::Unit,
    weight::Weight,
    widget::{Event, Widget},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Work out which plates to load on a barbell")]
struct Args {
    /// Total weight to load. Without it, commands are read from stdin.
    target: Option<String>,

    #[arg(long, default_value = "kg", value_parser = clap::value_parser!(Unit))]
    unit: Unit,

    /// Bar weight; defaults to the unit's standard bar.
    #[arg(long, value_parser = clap::value_parser!(Weight))]
    bar: Option<Weight>,

    #[arg(long)]
    collars: bool,

    /// Overrides the terminal's background.
    #[arg(long, value_parser = clap::value_parser!(Theme))]
    theme: Option<Theme>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let bar = match args.bar {
        Some(weight) => Bar::new(weight, args.unit)?,
        None => Bar::standard(args.unit),
    };
    let controller = Controller::new(Configuration::new(bar, args.collars));
    let source = Rc::new(AmbientTheme::from_env());
    let mut widget = Widget::mount(controller, args.theme, source);

    if let Some(target) = args.target {
        widget.dispatch(Event::TargetInput(target))?;
        println!("{}", render(&widget));
        widget.unmount();
        return Ok(());
    }

    println!("{}", catalog_line(widget.controller().unit()));
    println!("{}", render(&widget));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Show) => {
                println!("{}", catalog_line(widget.controller().unit()));
                println!("{}", render(&widget));
            }
            Ok(Command::Event(event)) => {
                let unit_toggled = event == Event::ToggleUnit;
                match widget.dispatch(event) {
                    Ok(()) => {
                        if unit_toggled {
                            println!("{}", catalog_line(widget.controller().unit()));
                        }
                        println!("{}", render(&widget));
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    widget.unmount();
    Ok(())
}
