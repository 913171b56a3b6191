use nalgebra::Vector3;
use thiserror::Error;

/// A single bond placement: one unit move along a principal axis.
///
/// The wire encoding is the signed code set {1, -1, 2, -2, 3, -3} for
/// {+X, -X, +Y, -Y, +Z, -Z}; the sign carries the direction and the
/// magnitude selects the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Invalid step code {0}: expected one of 1, -1, 2, -2, 3, -3")]
pub struct StepCodeError(pub i8);

impl Step {
    pub const ALL: [Step; 6] = [
        Step::PosX,
        Step::NegX,
        Step::PosY,
        Step::NegY,
        Step::PosZ,
        Step::NegZ,
    ];

    /// Decodes a signed step code. Codes outside the six canonical values
    /// are a caller bug and must never be silently mapped to a direction.
    pub fn from_code(code: i8) -> Result<Self, StepCodeError> {
        match code {
            1 => Ok(Step::PosX),
            -1 => Ok(Step::NegX),
            2 => Ok(Step::PosY),
            -2 => Ok(Step::NegY),
            3 => Ok(Step::PosZ),
            -3 => Ok(Step::NegZ),
            other => Err(StepCodeError(other)),
        }
    }

    pub fn code(self) -> i8 {
        match self {
            Step::PosX => 1,
            Step::NegX => -1,
            Step::PosY => 2,
            Step::NegY => -2,
            Step::PosZ => 3,
            Step::NegZ => -3,
        }
    }

    /// The unit displacement this step applies to the previous coordinate.
    pub fn displacement(self) -> Vector3<i32> {
        match self {
            Step::PosX => Vector3::new(1, 0, 0),
            Step::NegX => Vector3::new(-1, 0, 0),
            Step::PosY => Vector3::new(0, 1, 0),
            Step::NegY => Vector3::new(0, -1, 0),
            Step::PosZ => Vector3::new(0, 0, 1),
            Step::NegZ => Vector3::new(0, 0, -1),
        }
    }

    /// The step that undoes this one. Walking `step` then `step.reverse()`
    /// always revisits the previous coordinate.
    pub fn reverse(self) -> Self {
        match self {
            Step::PosX => Step::NegX,
            Step::NegX => Step::PosX,
            Step::PosY => Step::NegY,
            Step::NegY => Step::PosY,
            Step::PosZ => Step::NegZ,
            Step::NegZ => Step::PosZ,
        }
    }
}

/// An ordered assignment of one step per bond: the search space element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Folding {
    steps: Vec<Step>,
}

impl Folding {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn from_codes(codes: &[i8]) -> Result<Self, StepCodeError> {
        let steps = codes
            .iter()
            .map(|&code| Step::from_code(code))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn codes(&self) -> Vec<i8> {
        self.steps.iter().map(|step| step.code()).collect()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<Step> {
        self.steps.get(index).copied()
    }

    pub fn set_step(&mut self, index: usize, step: Step) {
        self.steps[index] = step;
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
