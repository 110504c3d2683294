use crate::domain::{Deadline, ImageAsset, ImageCatalog, NewChallenge};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs of the creation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Description,
    Deadline,
    Image,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Title => write!(f, "title"),
            FormField::Description => write!(f, "description"),
            FormField::Deadline => write!(f, "deadline"),
            FormField::Image => write!(f, "image"),
        }
    }
}

/// Errors that can occur in the creation dialog
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormError {
    #[error("Creation dialog is not open")]
    NotOpen,

    #[error("Missing required fields: {missing:?}")]
    Incomplete { missing: Vec<FormField> },

    #[error("Image not in catalog: {0}")]
    UnknownImage(String),
}

/// Uncommitted values of an open dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub image: Option<ImageAsset>,
}

impl FormDraft {
    /// Fields that would block a submit, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();

        if self.title.trim().is_empty() {
            missing.push(FormField::Title);
        }
        if self.description.trim().is_empty() {
            missing.push(FormField::Description);
        }
        if self.deadline.trim().is_empty() {
            missing.push(FormField::Deadline);
        }
        if self.image.is_none() {
            missing.push(FormField::Image);
        }

        missing
    }

    /// Assemble the challenge input. Values are kept as typed.
    fn to_new_challenge(&self) -> Result<NewChallenge, FormError> {
        let missing = self.missing_fields();
        match &self.image {
            Some(image) if missing.is_empty() => Ok(NewChallenge {
                title: self.title.clone(),
                description: self.description.clone(),
                deadline: Deadline::new(self.deadline.clone()),
                image: image.clone(),
            }),
            _ => Err(FormError::Incomplete { missing }),
        }
    }
}

/// The creation dialog: closed, or open with a draft.
///
/// Closing the dialog (by cancel or a successful submit) drops the draft.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreationForm {
    catalog: ImageCatalog,
    draft: Option<FormDraft>,
}

impl CreationForm {
    pub fn new(catalog: ImageCatalog) -> Self {
        Self {
            catalog,
            draft: None,
        }
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        self.draft.as_ref()
    }

    pub fn selected_image(&self) -> Option<&ImageAsset> {
        self.draft.as_ref().and_then(|d| d.image.as_ref())
    }

    /// Open the dialog. An already open dialog keeps its draft.
    pub fn open(&mut self) {
        if self.draft.is_none() {
            tracing::debug!("Opening creation dialog");
            self.draft = Some(FormDraft::default());
        }
    }

    /// Capture a field value. For [`FormField::Image`] the value is the
    /// image's alt text.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        let draft = self.draft.as_mut().ok_or(FormError::NotOpen)?;

        let slot = match field {
            FormField::Title => &mut draft.title,
            FormField::Description => &mut draft.description,
            FormField::Deadline => &mut draft.deadline,
            FormField::Image => {
                let image = self
                    .catalog
                    .find(&value)
                    .cloned()
                    .ok_or(FormError::UnknownImage(value))?;
                return self.select_image(image);
            }
        };

        *slot = value;
        Ok(())
    }

    /// Mark one catalog image as chosen, replacing any previous choice
    pub fn select_image(&mut self, image: ImageAsset) -> Result<(), FormError> {
        let draft = self.draft.as_mut().ok_or(FormError::NotOpen)?;

        if !self.catalog.contains(&image) {
            return Err(FormError::UnknownImage(image.alt));
        }

        tracing::debug!(alt = %image.alt, "Image selected");
        draft.image = Some(image);
        Ok(())
    }

    /// Validate the draft. On success the dialog closes and the input is
    /// returned for the store; on failure the dialog stays open unchanged.
    pub fn submit(&mut self) -> Result<NewChallenge, FormError> {
        let draft = self.draft.as_ref().ok_or(FormError::NotOpen)?;

        match draft.to_new_challenge() {
            Ok(input) => {
                tracing::debug!(title = %input.title, "Creation dialog submitted");
                self.draft = None;
                Ok(input)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Creation dialog rejected submit");
                Err(e)
            }
        }
    }

    /// Close the dialog and drop the draft. Returns whether it was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.draft.take().is_some();
        if was_open {
            tracing::debug!("Creation dialog cancelled");
        }
        was_open
    }
}
