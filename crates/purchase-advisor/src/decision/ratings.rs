use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::Dimension;
use super::InputError;

/// A validated rating on the 0-5 ordinal scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(5);

    pub fn new(dimension: Dimension, value: u8) -> Result<Self, InputError> {
        if value > Self::MAX.0 {
            return Err(InputError::RatingOutOfRange {
                dimension,
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        f64::from(rating.0)
    }
}

/// The user's rating for every dimension; unanswered dimensions stay at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingSet {
    ratings: [Rating; Dimension::COUNT],
}

impl RatingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw values, rejecting anything outside 0-5.
    pub fn from_values<I>(values: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (Dimension, u8)>,
    {
        let mut set = Self::new();
        for (dimension, value) in values {
            set.rate(dimension, value)?;
        }
        Ok(set)
    }

    /// Builds a set keyed by dimension codes such as `"A1"`.
    ///
    /// Codes are case-insensitive, so `"A1"` and `"a1"` name the same
    /// dimension; rating one dimension twice is rejected.
    pub fn from_codes<'a, I>(values: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut set = Self::new();
        let mut seen = [false; Dimension::COUNT];
        for (code, value) in values {
            let dimension: Dimension = code.parse()?;
            if std::mem::replace(&mut seen[dimension.index()], true) {
                return Err(InputError::DuplicateDimension(dimension));
            }
            let value = u8::try_from(value)
                .map_err(|_| InputError::RatingOutOfRange { dimension, value })?;
            set.rate(dimension, value)?;
        }
        Ok(set)
    }

    pub fn get(&self, dimension: Dimension) -> Rating {
        self.ratings[dimension.index()]
    }

    pub fn set(&mut self, dimension: Dimension, rating: Rating) {
        self.ratings[dimension.index()] = rating;
    }

    /// Validates and stores a raw value for one dimension.
    pub fn rate(&mut self, dimension: Dimension, value: u8) -> Result<(), InputError> {
        let rating = Rating::new(dimension, value)?;
        self.set(dimension, rating);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.ratings = [Rating::MIN; Dimension::COUNT];
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Rating)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    pub fn answered(&self) -> usize {
        self.ratings
            .iter()
            .filter(|rating| **rating > Rating::MIN)
            .count()
    }
}

impl Serialize for RatingSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let map: BTreeMap<Dimension, Rating> = self.iter().collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RatingSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, i64>::deserialize(deserializer)?;
        Self::from_codes(raw.iter().map(|(code, value)| (code.as_str(), *value)))
            .map_err(serde::de::Error::custom)
    }
}
