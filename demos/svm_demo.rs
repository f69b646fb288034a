use hinge_svm::{
    check::grad_check_sparse,
    LossFunction, Matrix, NaiveSvmLoss, SvmConfig, SvmStrategy, VectorizedSvmLoss,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

// Compares the two strategies on a random batch, then spot-checks the
// gradient numerically.
fn main() -> hinge_svm::Result<()> {
    env_logger::init();

    let (num_train, dim, num_classes) = (500, 64, 10);
    let mut rng = StdRng::seed_from_u64(231);

    let weights = Matrix::gaussian(dim, num_classes, 1e-3, &mut rng);
    let features = Matrix::gaussian(num_train, dim, 1.0, &mut rng);
    let labels: Vec<usize> = (0..num_train).map(|_| rng.gen_range(0..num_classes)).collect();
    let config = SvmConfig::new(5e-2, SvmStrategy::Vectorized);

    let t = Instant::now();
    let (naive_loss, naive_grad) = NaiveSvmLoss.loss_and_gradient(&weights, &features, &labels, config.reg)?;
    let naive_ms = t.elapsed().as_secs_f64() * 1e3;

    let t = Instant::now();
    let (vec_loss, vec_grad) = VectorizedSvmLoss.loss_and_gradient(&weights, &features, &labels, config.reg)?;
    let vec_ms = t.elapsed().as_secs_f64() * 1e3;

    println!("naive:      loss {naive_loss:.6} in {naive_ms:.2} ms");
    println!("vectorized: loss {vec_loss:.6} in {vec_ms:.2} ms");
    println!("loss difference: {:e}", (naive_loss - vec_loss).abs());

    let grad_diff = naive_grad.data.iter().flatten()
        .zip(vec_grad.data.iter().flatten())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("max gradient difference: {grad_diff:e}");

    let loss_fn = config.loss_function();
    let samples = grad_check_sparse(
        |w| loss_fn.loss(w, &features, &labels, config.reg),
        &weights,
        &vec_grad,
        10,
        1e-5,
        &mut rng,
    )?;
    for s in &samples {
        println!(
            "numerical: {:+.6e} analytic: {:+.6e}, relative error: {:.3e}",
            s.numerical, s.analytic, s.rel_error
        );
    }

    Ok(())
}
