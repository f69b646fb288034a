// Runs both SVM loss strategies once on a tiny fixed batch.
// Set RUST_LOG=debug to see the per-call summaries from the library.
use hinge_svm::{svm_loss, Matrix, Result, SvmStrategy};

fn main() -> Result<()> {
    env_logger::init();

    // N = 3 examples with D = 3 features, C = 2 classes.
    let features = Matrix::from_data(vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 2.0, 2.0],
        vec![2.0, 4.0, 1.0],
    ])?;
    let labels = [1, 0, 1];
    let reg = 0.1;
    let weights = Matrix::random(features.cols, 2);

    for strategy in [SvmStrategy::Naive, SvmStrategy::Vectorized] {
        let (loss, grad) = svm_loss(&weights, &features, &labels, reg, strategy)?;
        println!("{strategy:?}: loss = {loss:.6}");
        for row in &grad.data {
            println!("  {row:.4?}");
        }
    }

    Ok(())
}
