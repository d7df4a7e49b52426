//! Hand Evaluation Example
//!
//! Demonstrates solving, comparing and splitting hands across variants.
//! Run with `RUST_LOG=debug` to see which hand types were tried.

use hand_ranker::{Hand, PaiGowPokerHelper, Variant};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Poker Hand Evaluation Example ===\n");

    // Example 1: Solve a single hand
    println!("Example 1: Solving a 7-card hand");
    let hand = Hand::solve_codes(&["Kh", "Tc", "5d", "As", "3c", "3s", "2h"], Variant::Standard, false)?;
    println!("Pool: {:?}", hand.pool().iter().map(ToString::to_string).collect::<Vec<_>>());
    println!("Best hand: {hand} ({}, rank {})\n", hand.descr(), hand.rank());

    // Example 2: Compare hands and pick winners
    println!("Example 2: Three-way comparison with a tie");
    let hands = [
        Hand::solve_codes(&["Ad", "2d", "3c", "4h", "5s", "Kc", "9h"], Variant::Standard, false)?,
        Hand::solve_codes(&["Ac", "2s", "3d", "4c", "5h", "Qd", "8s"], Variant::Standard, false)?,
        Hand::solve_codes(&["Kd", "Ks", "Qh", "Jc", "7d", "4s", "2c"], Variant::Standard, false)?,
    ];
    for (i, hand) in hands.iter().enumerate() {
        println!("Hand {}: {}", i + 1, hand.descr());
    }
    let winners = Hand::winner_indices(&hands);
    println!("Winner(s): Hands {:?}\n", winners.iter().map(|&i| i + 1).collect::<Vec<_>>());

    // Example 3: Wild cards and qualifying hands
    println!("Example 3: Video poker variants");
    for (variant, codes) in [
        (Variant::JacksBetter, ["Td", "Ts", "Kc", "9h", "2d"]),
        (Variant::Joker, ["Ow", "Kd", "Kh", "Ks", "2c"]),
        (Variant::DeucesWild, ["2c", "2d", "Ah", "Kh", "Qh"]),
    ] {
        let hand = Hand::solve_codes(&codes, variant, true)?;
        println!(
            "{variant}: {} (qualifies: {})",
            hand.descr(),
            hand.qualifies_high()
        );
    }

    // Example 4: Pai Gow house way
    println!("\nExample 4: Pai Gow house way");
    let player = PaiGowPokerHelper::solve_codes(&["9d", "8c", "7h", "6s", "5d", "9c", "5h"])?;
    let banker = PaiGowPokerHelper::solve_codes(&["Ad", "Kc", "Kh", "Jd", "8s", "4c", "Ow"])?;
    println!("Player: {player} ({} / {})", player.hi().descr(), player.lo().descr());
    println!("Banker: {banker} ({} / {})", banker.hi().descr(), banker.lo().descr());
    let outcome = PaiGowPokerHelper::winners(&player, &banker);
    println!("Outcome: {outcome} ({})", i8::from(outcome));

    println!("\n=== End of Hand Evaluation Example ===");
    Ok(())
}
