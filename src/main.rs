//! Terminal client for one live table.
//!
//! Mirrors the remote table through a [`TableSession`], renders every
//! snapshot as it lands, runs the advisory decision clock, and prompts for
//! betting actions computed by the engine. Glue only; all state logic lives
//! in the library.

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use tableside::*;

#[derive(Parser)]
#[command(name = "tableside", about = "Live table client")]
struct Args {
    /// Authority host, e.g. 127.0.0.1:8000
    #[arg(long, default_value = "127.0.0.1:8000")]
    host: String,
    /// Connect over wss instead of ws
    #[arg(long)]
    secure: bool,
    /// Table to join
    #[arg(long)]
    table: TableId,
    /// Local user id
    #[arg(long)]
    user: UserId,
    /// Big blind of the table (snapshots do not echo it)
    #[arg(long, default_value_t = 10.0)]
    big_blind: Chips,
}

enum Wake {
    Store,
    Clock,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut session = TableSession::new(Endpoint::new(&args.host, args.secure));
    session.open(args.table, args.user).await?;
    let reader = session.reader();
    let mut clock = countdown(reader.clone(), args.user);
    let mut asked_start = false;
    loop {
        let wake = tokio::select! {
            _ = reader.changed() => Wake::Store,
            changed = clock.changed() => match changed {
                Ok(()) => Wake::Clock,
                Err(_) => break,
            },
        };
        let snapshot = reader.get();
        render(snapshot.as_ref(), args.user, *clock.borrow());
        let Some(snapshot) = snapshot else { continue };
        if !matches!(wake, Wake::Store) {
            continue;
        }
        if snapshot.is_turn(args.user) {
            if let Some(spot) = snapshot.spot(args.user, args.big_blind) {
                let action = tokio::task::spawn_blocking(move || decide(spot)).await?;
                session.send(ClientMessage::action(action));
            }
        } else if !snapshot.hand_in_progress && snapshot.player(args.user).is_some() {
            if !asked_start && ask_start().await? {
                session.send(ClientMessage::StartHand);
            }
            asked_start = true;
        } else {
            asked_start = false;
        }
    }
    session.close();
    Ok(())
}

async fn ask_start() -> anyhow::Result<bool> {
    let choice = tokio::task::spawn_blocking(|| {
        Select::new()
            .with_prompt("No hand in progress")
            .items(&["Start hand", "Wait"])
            .default(0)
            .interact()
            .unwrap()
    })
    .await?;
    Ok(choice == 0)
}

fn decide(spot: Spot) -> Action {
    let legal = spot.legal();
    let labels = legal.iter().map(Action::label).collect::<Vec<_>>();
    let selection = Select::new()
        .with_prompt("Your move")
        .items(labels.as_slice())
        .default(0)
        .report(false)
        .interact()
        .unwrap();
    match legal[selection] {
        Action::Raise(_) => raise(spot),
        action => action,
    }
}

fn raise(spot: Spot) -> Action {
    let presets = spot
        .presets()
        .map(|p| p.to_string())
        .join(" / ");
    let amount = Input::new()
        .with_prompt(format!(
            "Raise to [{}..{}] (presets {})",
            spot.min_raise(),
            spot.max_raise(),
            presets
        ))
        .report(false)
        .validate_with(|i: &String| -> Result<(), &str> {
            match i.parse::<Chips>() {
                Ok(_) => Ok(()),
                Err(_) => Err("Enter a NUMBER"),
            }
        })
        .validate_with(|i: &String| -> Result<(), &str> {
            match i.parse::<Chips>().unwrap() >= spot.min_raise() {
                true => Ok(()),
                false => Err("Raise too small"),
            }
        })
        .validate_with(|i: &String| -> Result<(), &str> {
            match i.parse::<Chips>().unwrap() <= spot.max_raise() {
                true => Ok(()),
                false => Err("Raise too large"),
            }
        })
        .interact()
        .unwrap()
        .parse::<Chips>()
        .unwrap();
    match amount == spot.max_raise() {
        true => Action::Shove(amount),
        false => Action::Raise(spot.clamp(amount)),
    }
}

fn render(snapshot: Option<&TableSnapshot>, user: UserId, clock: Countdown) {
    let Some(snapshot) = snapshot else {
        println!("{}", "not yet connected".dimmed());
        return;
    };
    let board = snapshot
        .community_cards
        .iter()
        .map(|c| paint(*c))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\n{} {}  pot {}  bet {}  [{}]",
        format!("table #{}", snapshot.table_id).bold(),
        snapshot.street.label().to_uppercase().yellow(),
        format!("{}", snapshot.pot).green(),
        snapshot.current_bet,
        board
    );
    for player in &snapshot.players {
        let cards = player
            .cards
            .iter()
            .map(|slot| match slot.card() {
                Some(card) => paint(card),
                None => "🂠".dimmed().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let marker = match snapshot.current_player == Some(player.user_id) {
            true => "→",
            false => " ",
        };
        let name = match player.user_id == user {
            true => format!("you (#{})", player.user_id).bold().to_string(),
            false => format!("#{}", player.user_id),
        };
        println!(
            "{} seat {}  {:<16} stack {:<8} bet {:<6} {:<12} {}",
            marker,
            player.seat,
            name,
            player.stack,
            player.current_bet,
            player.status.label(),
            cards
        );
    }
    if let Some(seconds) = clock.remaining() {
        let line = format!("⏱ {:2}s to act", seconds);
        match seconds <= 5 {
            true => println!("{}", line.red().bold()),
            false => println!("{}", line.cyan()),
        }
    }
}

fn paint(card: Card) -> String {
    match card.suit.is_red() {
        true => card.to_string().red().to_string(),
        false => card.to_string().white().to_string(),
    }
}
