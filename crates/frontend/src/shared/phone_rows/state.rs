use contracts::shared::phones::split_phones_csv;

/// One phone input. `key` is stable for the lifetime of the row so the view
/// can remove exactly the row whose button was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRow {
    pub key: u64,
    pub value: String,
}

/// Ordered phone inputs of one form container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneRowList {
    rows: Vec<PhoneRow>,
    next_key: u64,
}

impl PhoneRowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding a single blank row, as the create form starts out
    pub fn with_blank_row() -> Self {
        let mut list = Self::new();
        list.add_row();
        list
    }

    pub fn rows(&self) -> &[PhoneRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn values(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.value.clone()).collect()
    }

    /// Append a blank row and return its key
    pub fn add_row(&mut self) -> u64 {
        self.push_value(String::new())
    }

    fn push_value(&mut self, value: String) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(PhoneRow { key, value });
        key
    }

    /// Remove the row with `key`; unknown keys are ignored
    pub fn remove_row(&mut self, key: u64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.key != key);
        self.rows.len() != before
    }

    pub fn set_value(&mut self, key: u64, value: String) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            row.value = value;
        }
    }

    /// Replace all rows with the numbers of a comma separated list.
    ///
    /// Parts are trimmed but not filtered. When nothing is parsed (`None` or
    /// an empty string) a single blank row is added.
    pub fn rebuild(&mut self, phones_csv: Option<&str>) {
        self.rows.clear();
        for phone in split_phones_csv(phones_csv) {
            self.push_value(phone);
        }
        if self.rows.is_empty() {
            self.add_row();
        }
    }
}
