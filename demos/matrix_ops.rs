use anyhow::Result;
use mini_numpy::math::{Matrix, Vector, VectorOperand};
use mini_numpy::PrintOptions;

fn main() -> Result<()> {
    env_logger::init();

    let m1 = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    let m2 = Matrix::new(vec![vec![10, 11], vec![20, 21], vec![30, 31]])?;

    println!("m1         = {}", m1);
    println!("m1 shape   = {:?}", m1.shape());
    println!("m1^T       = {}", m1.transpose());
    println!("-m1        = {}", -&m1);
    println!("m1[:, 0]   = {:?}", m1.column(0)?);
    println!("m1 * 2     = {}", &m1 * 2);
    println!("m1 x m2    = {}", m1.matmul(&m2)?);

    // Shape errors are ordinary values.
    if let Err(e) = m1.subtract(&m2) {
        println!("m1 - m2    -> {}", e);
    }

    let v1 = Vector::new(vec![1, 2, 3]);
    let v2 = Vector::new(vec![4, 5, 6]);
    println!("v1 + v2    = {}", v1.add(&v2)?);
    println!("v1 - v2    = {}", v1.subtract(&v2)?);
    println!("v1 . v2    = {}", v1.dot(&v2)?);
    println!("v1 * 5     = {}", v1.scale(5));
    println!("v1 / v2    = {:?}", v1.divide(VectorOperand::Vector(&v2))?);

    let opts: PrintOptions = std::env::var("MINI_NUMPY_PRINT")
        .unwrap_or_else(|_| "precision=3".to_string())
        .parse()
        .map_err(anyhow::Error::msg)?;
    println!("v2 / 3     = {}", v2.divide_scalar(3)?.display_with(&opts));

    Ok(())
}
