/// Rolling counters behind the statistics window.

/// Ring buffer that stores the last N samples of a metric.
pub struct RingBuffer {
    data: Vec<f32>,
    head: usize,
    len: usize,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            head: 0,
            len: 0,
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Return samples in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let start = if self.len < self.capacity {
            0
        } else {
            self.head
        };
        (0..self.len).map(move |i| self.data[(start + i) % self.capacity])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn last(&self) -> Option<f32> {
        if self.len == 0 {
            None
        } else {
            let idx = (self.head + self.capacity - 1) % self.capacity;
            Some(self.data[idx])
        }
    }
}

/// Sampled history of the walk: live ants, remaining tiles, cumulative exits.
pub struct SimStats {
    pub ants: RingBuffer,
    pub tiles: RingBuffer,
    pub exited: RingBuffer,

    pub sample_interval: u32,
    pub tick_counter: u32,
}

impl SimStats {
    pub fn new(capacity: usize) -> Self {
        Self {
            ants: RingBuffer::new(capacity),
            tiles: RingBuffer::new(capacity),
            exited: RingBuffer::new(capacity),
            sample_interval: crate::config::STATS_SAMPLE_INTERVAL,
            tick_counter: 0,
        }
    }

    /// Record a sample every `sample_interval` ticks.
    pub fn record(&mut self, ant_count: usize, tile_count: usize, exited_total: u64) {
        self.tick_counter += 1;
        if self.tick_counter % self.sample_interval != 0 {
            return;
        }

        self.ants.push(ant_count as f32);
        self.tiles.push(tile_count as f32);
        self.exited.push(exited_total as f32);
    }
}
