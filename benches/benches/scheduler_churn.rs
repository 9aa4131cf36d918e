// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_modal::presenter::{Presenter, PresenterSlot};
use understory_modal::request::{Controller, DialogRequest};
use understory_modal::scheduler::ModalScheduler;
use understory_modal::types::{ButtonKind, DismissalCause, ModalDialogType};

#[derive(Default)]
struct Sink(PresenterSlot);

impl Presenter for Sink {
    fn slot(&self) -> &PresenterSlot {
        &self.0
    }
    fn attach(&self, request: &DialogRequest) {
        black_box(request);
    }
    fn detach(&self, request: &DialogRequest) {
        black_box(request);
    }
}

struct Noop;

impl Controller for Noop {
    fn on_click(&mut self, _request: &DialogRequest, _button: ButtonKind) {}
    fn on_cancel(&mut self, _request: &DialogRequest) {}
    fn on_dismiss(&mut self, _request: &DialogRequest, cause: DismissalCause) {
        black_box(cause);
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn scheduler() -> ModalScheduler<ModalDialogType> {
    let scheduler = ModalScheduler::new(Rc::new(Sink::default()), ModalDialogType::App);
    scheduler.register_presenter(Rc::new(Sink::default()), ModalDialogType::Tab);
    scheduler
}

fn requests(n: usize) -> Vec<DialogRequest> {
    (0..n).map(|_| DialogRequest::new(Noop)).collect()
}

fn bench_fifo(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo");
    for &n in &[16usize, 128, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("show_then_drain_n{}", n), |b| {
            b.iter_batched(
                || (scheduler(), requests(n)),
                |(s, reqs)| {
                    for r in reqs {
                        s.show_dialog(r, ModalDialogType::Tab);
                    }
                    while let Some(current) = s.current_dialog() {
                        let _ = s.dismiss_dialog(&current, DismissalCause::PositiveButton);
                    }
                    black_box(s.pending_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_preemption(c: &mut Criterion) {
    let mut group = c.benchmark_group("preemption");
    for &n in &[16usize, 128, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        // Each app dialog preempts the tab dialog and is dismissed right away,
        // bringing the tab dialog back.
        group.bench_function(format!("ping_pong_n{}", n), |b| {
            b.iter_batched(
                || {
                    let s = scheduler();
                    s.show_dialog(DialogRequest::new(Noop), ModalDialogType::Tab);
                    (s, requests(n))
                },
                |(s, reqs)| {
                    for r in reqs {
                        s.show_dialog(r.clone(), ModalDialogType::App);
                        let _ = s.dismiss_dialog(&r, DismissalCause::NegativeButton);
                    }
                    black_box(s.current_type());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_cancel_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancel_all");
    for &n in &[128usize, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("sweep_n{}", n), |b| {
            b.iter_batched(
                || {
                    let s = scheduler();
                    for (i, r) in requests(n).into_iter().enumerate() {
                        let ty = if i % 4 == 0 {
                            ModalDialogType::App
                        } else {
                            ModalDialogType::Tab
                        };
                        s.show_dialog(r, ty);
                    }
                    s
                },
                |s| {
                    s.cancel_all_dialogs();
                    black_box(s.is_showing());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    let ops = 2048usize;
    group.throughput(Throughput::Elements(ops as u64));
    group.bench_function("random_ops", |b| {
        b.iter_batched(
            || (scheduler(), Rng::new(0x5eed_cafe)),
            |(s, mut rng)| {
                for _ in 0..ops {
                    let ty = if rng.next_u64() % 3 == 0 {
                        ModalDialogType::App
                    } else {
                        ModalDialogType::Tab
                    };
                    match rng.next_u64() % 6 {
                        0 | 1 => s.show_dialog(DialogRequest::new(Noop), ty),
                        2 => s.show_dialog_as_next(DialogRequest::new(Noop), ty),
                        3 => {
                            if let Some(current) = s.current_dialog() {
                                let _ = s.cancel_dialog(&current, DismissalCause::Cancelled);
                            }
                        }
                        4 => s.suspend_type(ty),
                        _ => s.resume_type(ty),
                    }
                }
                black_box(s.pending_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_fifo,
    bench_preemption,
    bench_cancel_all,
    bench_mixed
);
criterion_main!(benches);
