//! SOL/lamport conversions
//!
//! Balances travel over the RPC boundary in lamports; everything
//! user-facing is denominated in SOL.

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert a SOL amount to lamports, flooring fractional lamports.
/// Non-positive and non-finite amounts convert to zero.
pub fn sol_to_lamports(sol: f64) -> u64 {
    if !sol.is_finite() || sol <= 0.0 {
        return 0;
    }
    (sol * LAMPORTS_PER_SOL as f64) as u64
}

/// Convert lamports to a SOL amount.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
