use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use mixfft::{
    fft_32_with_opts_and_plan, r2c_32_with_plan,
    options::{KernelStrategy, Options},
    planner::{self, Direction},
    Complex32,
};
use rand::{distributions::Standard, thread_rng, Rng};
use utilities::rustfft::FftPlanner;

/// Frame sizes of a 48 kHz codec (2.5, 5, 10 and 20 ms), plus a few odd-sized ones
const LENGTHS: &[usize] = &[60, 120, 240, 480, 960, 45, 75, 1000];

fn generate_complex_numbers(n: usize) -> Vec<Complex32> {
    let samples: Vec<f32> = thread_rng().sample_iter(Standard).take(2 * n).collect();
    samples
        .chunks_exact(2)
        .map(|pair| Complex32::new(pair[0], pair[1]))
        .collect()
}

fn generate_reals(n: usize) -> Vec<f32> {
    thread_rng().sample_iter(Standard).take(n).collect()
}

fn benchmark_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f32");

    for &len in LENGTHS {
        group.throughput(Throughput::Elements(len as u64));
        let descriptor = planner::descriptor(len).unwrap();

        for (id, kernel) in [
            ("mixfft scalar", KernelStrategy::Scalar),
            ("mixfft vectorized", KernelStrategy::Vectorized),
        ] {
            let options = Options::with_kernel(kernel);
            group.bench_function(BenchmarkId::new(id, len), |b| {
                b.iter_batched(
                    || generate_complex_numbers(len),
                    |mut signal| {
                        fft_32_with_opts_and_plan(
                            &mut signal,
                            Direction::Forward,
                            &options,
                            &descriptor,
                        )
                        .unwrap();
                        signal
                    },
                    BatchSize::SmallInput,
                );
            });
        }

        let fft = FftPlanner::<f32>::new().plan_fft_forward(len);
        group.bench_function(BenchmarkId::new("RustFFT", len), |b| {
            b.iter_batched(
                || generate_complex_numbers(len),
                |mut signal| {
                    fft.process(&mut signal);
                    signal
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inverse f32");

    for &len in LENGTHS {
        group.throughput(Throughput::Elements(len as u64));
        let descriptor = planner::descriptor(len).unwrap();
        let options = Options::guess_options(len);

        group.bench_function(BenchmarkId::new("mixfft", len), |b| {
            b.iter_batched(
                || generate_complex_numbers(len),
                |mut signal| {
                    fft_32_with_opts_and_plan(
                        &mut signal,
                        Direction::Inverse,
                        &options,
                        &descriptor,
                    )
                    .unwrap();
                    signal
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_r2c(c: &mut Criterion) {
    let mut group = c.benchmark_group("R2C f32");

    for &len in LENGTHS.iter().filter(|len| *len % 2 == 0) {
        group.throughput(Throughput::Elements(len as u64));
        let plan = planner::real_descriptor(len).unwrap();
        let mut spectrum = vec![Complex32::new(0.0, 0.0); plan.spectrum_len()];

        group.bench_function(BenchmarkId::new("mixfft", len), |b| {
            b.iter_batched(
                || generate_reals(len),
                |signal| r2c_32_with_plan(&signal, &mut spectrum, &plan).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_forward, benchmark_inverse, benchmark_r2c);
criterion_main!(benches);
