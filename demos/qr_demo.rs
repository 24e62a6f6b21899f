use hqr::{multiply, qr_decompose, random_matrix, transpose};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let n = 4;
    let mut rng = StdRng::seed_from_u64(2024);
    let a = random_matrix(n, n, &mut rng).unwrap();
    println!("A =\n{a:.4}");

    match qr_decompose(&a) {
        Ok(qr) => {
            println!("Q =\n{:.4}", qr.q());
            println!("R =\n{:.4}", qr.r());
            let rebuilt = multiply(qr.q(), qr.r()).unwrap();
            let qtq = multiply(&transpose(qr.q()), qr.q()).unwrap();
            println!("Q·R =\n{rebuilt:.4}");
            println!("QᵗQ =\n{qtq:.4}");
        }
        Err(e) => eprintln!("decomposition failed: {e}"),
    }
}
