//! Slot-machine presentation shown while a dinner is being picked.
//!
//! Purely cosmetic: the rolled slot items never reach the real request. The
//! schedule is fixed and independent of the network call.

use crate::constants::{SPIN_COMPLETE_DELAY, SPIN_DURATION, SPIN_TICK};
use crate::data_types::Category;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpinPhase {
    Spinning,
    Settled,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SlotItem {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

const fn slot(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    color: &'static str,
) -> SlotItem {
    SlotItem {
        id,
        name,
        icon,
        color,
    }
}

pub const SLOT_ITEMS: [SlotItem; 15] = [
    slot("1", "Kuru Fasulye", "🫘", "amber"),
    slot("2", "Nohut", "🫘", "yellow"),
    slot("3", "Lahmacun", "🥙", "red"),
    slot("4", "Mantı", "🥟", "blue"),
    slot("5", "Köfte", "🍖", "orange"),
    slot("6", "Pide", "🥖", "yellow"),
    slot("7", "Mercimek Çorbası", "🍲", "orange"),
    slot("8", "Yayla Çorbası", "🥛", "gray"),
    slot("9", "Pilav", "🍚", "yellow"),
    slot("10", "Bulgur Pilavı", "🌾", "amber"),
    slot("11", "Çoban Salatası", "🥗", "green"),
    slot("12", "Gavurdağı Salatası", "🥒", "emerald"),
    slot("13", "Sütlaç", "🍮", "pink"),
    slot("14", "Baklava", "🥮", "amber"),
    slot("15", "Künefe", "🧀", "orange"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinFrame {
    pub phase: SpinPhase,
    /// Ticks so far.
    pub spins: u32,
    /// One slot per selected category, in selection order. Empty until the
    /// first tick.
    pub slots: Vec<SlotItem>,
}

impl SpinFrame {
    fn initial() -> Self {
        Self {
            phase: SpinPhase::Spinning,
            spins: 0,
            slots: Vec::new(),
        }
    }
}

/// Picks a random pool item per category and stamps it with the category's
/// own name, icon and color. Only the id survives from the pool.
pub fn roll_slots<R: Rng + ?Sized>(categories: &[Category], rng: &mut R) -> Vec<SlotItem> {
    categories
        .iter()
        .map(|cat| {
            let info = cat.info();
            let item = SLOT_ITEMS.choose(rng).copied().unwrap_or(SLOT_ITEMS[0]);
            SlotItem {
                name: info.label,
                icon: info.icon,
                color: info.color,
                ..item
            }
        })
        .collect()
}

/// Running presentation. Dropping the handle cancels the tick interval and
/// every pending timeout; the completion callback then never fires.
pub struct SpinHandle {
    task: JoinHandle<()>,
    frames: watch::Receiver<SpinFrame>,
}

impl SpinHandle {
    pub fn start<F>(categories: Vec<Category>, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::start_with_rng(categories, StdRng::from_entropy(), on_complete)
    }

    pub fn start_with_rng<F>(categories: Vec<Category>, rng: StdRng, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (frame_tx, frame_rx) = watch::channel(SpinFrame::initial());
        let started = Instant::now();

        log::debug!("Spin started for {} categories", categories.len());
        let task = tokio::spawn(run_spin(categories, rng, frame_tx, started, on_complete));

        Self {
            task,
            frames: frame_rx,
        }
    }

    pub fn frame(&self) -> SpinFrame {
        self.frames.borrow().clone()
    }

    pub fn phase(&self) -> SpinPhase {
        self.frames.borrow().phase
    }

    pub fn subscribe(&self) -> watch::Receiver<SpinFrame> {
        self.frames.clone()
    }

    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for SpinHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_spin<F>(
    categories: Vec<Category>,
    mut rng: StdRng,
    frames: watch::Sender<SpinFrame>,
    started: Instant,
    on_complete: F,
) where
    F: FnOnce() + Send + 'static,
{
    let mut ticker = time::interval_at(started + SPIN_TICK, SPIN_TICK);
    let stop = time::sleep_until(started + SPIN_DURATION);
    tokio::pin!(stop);

    // ticks due at the stop deadline still land before settling
    loop {
        tokio::select! {
            biased;
            _ = ticker.tick() => {
                let slots = roll_slots(&categories, &mut rng);
                frames.send_modify(|frame| {
                    frame.spins += 1;
                    frame.slots = slots;
                });
            }
            _ = &mut stop => break,
        }
    }

    frames.send_modify(|frame| frame.phase = SpinPhase::Settled);
    log::debug!("Spin settled after {} ticks", frames.borrow().spins);

    time::sleep_until(started + SPIN_DURATION + SPIN_COMPLETE_DELAY).await;
    on_complete();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };
    use tokio::task;

    async fn run_for(ms: u64) {
        time::advance(Duration::from_millis(ms)).await;
        for _ in 0..16 {
            task::yield_now().await;
        }
    }

    fn counting_spin(categories: Vec<Category>) -> (SpinHandle, Arc<AtomicUsize>) {
        let completions = Arc::new(AtomicUsize::new(0));
        let counter = completions.clone();
        let handle = SpinHandle::start_with_rng(categories, StdRng::seed_from_u64(7), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (handle, completions)
    }

    #[test]
    fn rolled_slots_carry_category_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let cats = [Category::Dessert, Category::MainCourse];
        for _ in 0..50 {
            let slots = roll_slots(&cats, &mut rng);
            assert_eq!(slots.len(), 2);
            assert_eq!(slots[0].name, "Dessert");
            assert_eq!(slots[0].icon, Category::Dessert.info().icon);
            assert_eq!(slots[1].name, "Main Course");
            assert_eq!(slots[1].color, Category::MainCourse.info().color);
            assert!(slots
                .iter()
                .all(|s| SLOT_ITEMS.iter().any(|item| item.id == s.id)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn settles_after_three_seconds_then_completes_once() {
        let (handle, completions) = counting_spin(vec![Category::Soup, Category::Salad]);
        assert_eq!(handle.phase(), SpinPhase::Spinning);

        run_for(2999).await;
        let frame = handle.frame();
        assert_eq!(frame.phase, SpinPhase::Spinning);
        assert_eq!(frame.spins, 29);
        assert_eq!(frame.slots.len(), 2);

        run_for(1).await;
        let settled = handle.frame();
        assert_eq!(settled.phase, SpinPhase::Settled);
        assert_eq!(settled.spins, 30);
        assert_eq!(completions.load(Ordering::SeqCst), 0);

        run_for(999).await;
        assert_eq!(completions.load(Ordering::SeqCst), 0);

        run_for(1).await;
        assert_eq!(completions.load(Ordering::SeqCst), 1);

        run_for(10_000).await;
        assert_eq!(completions.load(Ordering::SeqCst), 1);
        // frozen after settling
        assert_eq!(handle.frame(), settled);
    }

    #[tokio::test(start_paused = true)]
    async fn single_jump_still_settles() {
        let (handle, completions) = counting_spin(vec![Category::MainCourse]);

        run_for(3000).await;
        assert_eq!(handle.phase(), SpinPhase::Settled);

        run_for(1000).await;
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_ticks_and_completion() {
        let (handle, completions) = counting_spin(Category::ALL.to_vec());
        let frames = handle.subscribe();

        run_for(1500).await;
        let before = frames.borrow().clone();
        assert_eq!(before.spins, 15);

        drop(handle);
        run_for(5000).await;

        assert_eq!(completions.load(Ordering::SeqCst), 0);
        assert_eq!(*frames.borrow(), before);
        assert_eq!(frames.borrow().phase, SpinPhase::Spinning);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_first_tick() {
        let (handle, completions) = counting_spin(vec![Category::Soup]);
        handle.cancel();

        run_for(5000).await;
        assert_eq!(handle.frame().spins, 0);
        assert!(handle.frame().slots.is_empty());
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }
}
