/// A simple circular buffer implementation.
pub struct CircularBuffer<T> {
    buffer: Vec<Option<T>>,
    head: usize,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new CircularBuffer with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        let mut buffer: Vec<Option<T>> = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        CircularBuffer {
            buffer,
            head: 0,
            capacity,
        }
    }

    /// Adds an item to the circular buffer, overwriting the oldest item if full.
    pub fn push(&mut self, item: T) {
        self.buffer[self.head] = Some(item);
        self.head = (self.head + 1) % self.capacity;
    }

    /// Retrieves an item by its index, where 0 is the most recently added item.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.capacity {
            return None;
        }
        let idx = (self.head + self.capacity - index - 1) % self.capacity;
        self.buffer[idx].as_ref()
    }

    /// Clears the buffer, setting all elements to None.
    pub fn clear(&mut self) {
        for slot in self.buffer.iter_mut() {
            *slot = None;
        }
    }

    /// Returns the number of elements currently stored in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.iter().filter(|item| item.is_some()).count()
    }
}
