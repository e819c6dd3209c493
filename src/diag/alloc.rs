// 할당 카운터 (GlobalAlloc 래퍼)
// 스레드별 live byte / 할당 횟수 집계 → 다른 테스트 스레드의 할당과 섞이지 않음
// 사용하려면 바이너리에서 #[global_allocator]로 설치해야 함

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

thread_local! {
    static LIVE_BYTES: Cell<i64> = const { Cell::new(0) };
    static ALLOC_COUNT: Cell<u64> = const { Cell::new(0) };
}

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// System 할당자 위임 + 스레드별 카운터
pub struct CountingAllocator;

impl CountingAllocator {
    pub const fn new() -> Self {
        CountingAllocator
    }
}

impl Default for CountingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// 스레드 종료 중(TLS 해제 후)에는 집계를 건너뜀
fn record(bytes: i64, allocs: u64) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + bytes));
    if allocs > 0 {
        let _ = ALLOC_COUNT.try_with(|count| count.set(count.get() + allocs));
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        INSTALLED.store(true, Ordering::Relaxed);
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record(layout.size() as i64, 1);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        INSTALLED.store(true, Ordering::Relaxed);
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            record(layout.size() as i64, 1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        record(-(layout.size() as i64), 0);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            record(new_size as i64 - layout.size() as i64, 0);
        }
        new_ptr
    }
}

/// CountingAllocator가 전역 할당자로 설치되어 동작 중인지
pub fn is_installed() -> bool {
    INSTALLED.load(Ordering::Relaxed)
}

/// 현재 스레드에서 할당 후 아직 해제되지 않은 바이트 수
/// - 다른 스레드가 해제한 경우 음수가 될 수 있음
pub fn thread_live_bytes() -> i64 {
    LIVE_BYTES.try_with(Cell::get).unwrap_or(0)
}

/// 현재 스레드의 누적 할당 횟수
pub fn thread_alloc_count() -> u64 {
    ALLOC_COUNT.try_with(Cell::get).unwrap_or(0)
}
