use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::{CollectionResult, CommitteeService, DistributionResult};
use crate::domain::{format_cents, parse_cents, Cents};

/// Kameti - Committee Savings Group Tracker
#[derive(Parser)]
#[command(name = "kameti")]
#[command(about = "An in-memory committee (ROSCA) savings group tracker")]
#[command(version)]
pub struct Cli {
    /// Maximum number of members (prompted for interactively if omitted)
    #[arg(short, long)]
    pub members: Option<usize>,

    /// Fixed per-cycle contribution amount, e.g. "25.00" or "25"
    /// (prompted for interactively if omitted)
    #[arg(short, long)]
    pub contribution: Option<String>,

    /// Output format for the status view: table, json
    #[arg(long, default_value = "table")]
    pub format: String,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock().lines();

        let Some(capacity) = self.resolve_capacity(&mut input)? else {
            return Ok(()); // EOF before setup finished
        };
        let Some(contribution_cents) = self.resolve_contribution(&mut input)? else {
            return Ok(());
        };

        let mut service = CommitteeService::new(capacity, contribution_cents)?;
        println!(
            "Committee ready: up to {} member(s), {} per contribution.",
            capacity,
            format_cents(contribution_cents)
        );

        loop {
            print_menu();
            let Some(choice) = read_line(&mut input, "Enter your choice: ")? else {
                break; // EOF behaves like Exit
            };

            match choice.trim() {
                "1" => run_add_member(&mut service, &mut input)?,
                "2" => run_view_members(&service),
                "3" => run_collect_contributions(&mut service),
                "4" => run_distribute_funds(&mut service),
                "5" => run_status(&service, &self.format)?,
                "6" => break,
                "" => {}
                _ => println!("Invalid choice. Please try again."),
            }
        }

        println!("Exiting.");
        Ok(())
    }

    fn resolve_capacity(
        &self,
        input: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<Option<usize>> {
        if let Some(members) = self.members {
            if members == 0 {
                anyhow::bail!("--members must be at least 1");
            }
            return Ok(Some(members));
        }

        loop {
            let Some(line) = read_line(input, "Enter the maximum number of members: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if n > 0 => return Ok(Some(n)),
                _ => println!("Please enter a positive whole number."),
            }
        }
    }

    fn resolve_contribution(
        &self,
        input: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<Option<Cents>> {
        if let Some(amount) = &self.contribution {
            let cents = parse_cents(amount)
                .context("Invalid contribution format. Use '25.00' or '25'")?;
            if cents <= 0 {
                anyhow::bail!("--contribution must be positive");
            }
            return Ok(Some(cents));
        }

        loop {
            let Some(line) = read_line(input, "Enter the fixed contribution amount: ")? else {
                return Ok(None);
            };
            match parse_cents(&line) {
                Ok(cents) if cents > 0 => return Ok(Some(cents)),
                _ => println!("Please enter a positive amount, e.g. '25.00' or '25'."),
            }
        }
    }
}

fn print_menu() {
    println!();
    println!("--- Committee ---");
    println!("1. Add Member");
    println!("2. View Members");
    println!("3. Collect Contributions");
    println!("4. Distribute Funds");
    println!("5. Status");
    println!("6. Exit");
}

/// Print a prompt and read one line. Returns None on EOF.
fn read_line(
    input: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;
    match input.next() {
        Some(line) => Ok(Some(line.context("Failed to read from stdin")?)),
        None => Ok(None),
    }
}

fn run_add_member(
    service: &mut CommitteeService,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    // Check before prompting so a full roster doesn't ask for a name first.
    if service.is_full() {
        println!(
            "Committee is full: capacity of {} member(s) already reached",
            service.capacity()
        );
        return Ok(());
    }

    let Some(name) = read_line(input, "Enter member name: ")? else {
        return Ok(());
    };

    match service.add_member(&name) {
        Ok(member) => println!("Added member: {} (id {})", member.name, member.id),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn run_view_members(service: &CommitteeService) {
    let members = service.list_members();
    if members.is_empty() {
        println!("No members in the committee.");
        return;
    }

    println!(
        "{:<4} {:<20} {:>14} {:>14}",
        "ID", "NAME", "CONTRIBUTED", "RECEIVED"
    );
    println!("{}", "-".repeat(55));
    for member in members {
        println!(
            "{:<4} {:<20} {:>14} {:>14}",
            member.id,
            truncate(&member.name, 20),
            format_cents(member.total_contributed_cents),
            format_cents(member.total_received_cents)
        );
    }
}

fn run_collect_contributions(service: &mut CommitteeService) {
    match service.collect_contributions() {
        Ok(CollectionResult {
            amount_each_cents,
            members,
        }) => {
            println!(
                "Collected {} from each of {} member(s):",
                format_cents(amount_each_cents),
                members.len()
            );
            for member in members {
                println!(
                    "  {:<20} total contributed: {}",
                    truncate(&member.name, 20),
                    format_cents(member.total_contributed_cents)
                );
            }
        }
        Err(err) => println!("{}", err),
    }
}

fn run_distribute_funds(service: &mut CommitteeService) {
    match service.distribute_funds() {
        Ok(DistributionResult {
            recipient,
            amount_cents,
            cycle_complete,
        }) => {
            println!(
                "Distributed {} to {} (id {})",
                format_cents(amount_cents),
                recipient.name,
                recipient.id
            );
            if cycle_complete {
                println!("All members have now received a payout this cycle.");
            }
        }
        Err(err) => println!("{}", err),
    }
}

fn run_status(service: &CommitteeService, format: &str) -> Result<()> {
    let status = service.status();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        _ => {
            println!(
                "Committee status as of {}",
                status.as_of.format("%Y-%m-%d %H:%M:%S")
            );
            println!("  Members:           {} / {}", status.member_count, status.capacity);
            println!(
                "  Contribution:      {}",
                format_cents(status.contribution_cents)
            );
            println!("  Current pot:       {}", format_cents(status.pot_cents));
            println!(
                "  Total contributed: {}",
                format_cents(status.total_contributed_cents)
            );
            println!(
                "  Total distributed: {}",
                format_cents(status.total_distributed_cents)
            );
            match &status.next_recipient {
                Some(recipient) => {
                    println!("  Next recipient:    {} (id {})", recipient.name, recipient.id)
                }
                None => println!("  Next recipient:    (none)"),
            }
            println!(
                "  Cycle complete:    {}",
                if status.cycle_complete { "yes" } else { "no" }
            );
        }
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
