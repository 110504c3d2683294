use challenges_core::{FormDraft, FormField};

/// Cursor state of the creation form (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormInput {
    focus: FormField,
    image_index: usize,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            focus: FormField::Title,
            image_index: 0,
        }
    }
}

impl FormInput {
    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Deadline,
            FormField::Deadline => FormField::Image,
            FormField::Image => FormField::Title,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Image,
            FormField::Description => FormField::Title,
            FormField::Deadline => FormField::Description,
            FormField::Image => FormField::Deadline,
        };
    }

    /// Move the image cursor, wrapping around `len` images. Without a
    /// current selection the cursor stays put so its image gets picked first.
    pub fn shift_image(&mut self, forward: bool, len: usize, has_selection: bool) -> usize {
        if len == 0 {
            return 0;
        }
        if !has_selection {
            self.image_index = self.image_index.min(len - 1);
            return self.image_index;
        }
        self.image_index = if forward {
            (self.image_index + 1) % len
        } else {
            (self.image_index + len - 1) % len
        };
        self.image_index
    }

    /// Text of the focused field with one character appended
    pub fn typed(&self, draft: &FormDraft, c: char) -> Option<String> {
        let mut value = self.text(draft)?.to_string();
        value.push(c);
        Some(value)
    }

    /// Text of the focused field with its last character removed
    pub fn erased(&self, draft: &FormDraft) -> Option<String> {
        let mut value = self.text(draft)?.to_string();
        value.pop();
        Some(value)
    }

    fn text<'a>(&self, draft: &'a FormDraft) -> Option<&'a str> {
        match self.focus {
            FormField::Title => Some(&draft.title),
            FormField::Description => Some(&draft.description),
            FormField::Deadline => Some(&draft.deadline),
            FormField::Image => None,
        }
    }
}
