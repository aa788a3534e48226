//! One employee's assessment lifecycle within a review cycle.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::review::assessment::{ManagerAssessment, SelfAssessment};
use crate::domain::review::ids::{ParticipantId, UserId};

/// Where a participant stands in the submission workflow.
///
/// Transitions run strictly forward:
/// `Pending -> SelfAssessmentSubmitted -> ManagerAssessmentSubmitted -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantStatus {
    Pending,
    SelfAssessmentSubmitted,
    ManagerAssessmentSubmitted,
    Completed,
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantStatus::Pending => write!(f, "PENDING"),
            ParticipantStatus::SelfAssessmentSubmitted => write!(f, "SELF_ASSESSMENT_SUBMITTED"),
            ParticipantStatus::ManagerAssessmentSubmitted => {
                write!(f, "MANAGER_ASSESSMENT_SUBMITTED")
            }
            ParticipantStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// An employee/supervisor pairing being evaluated within a cycle.
///
/// Participants are owned by their `ReviewCycle` and have no independent
/// lifecycle; all mutation goes through the aggregate, which is why the
/// mutators below are `pub(super)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewParticipant {
    id: ParticipantId,
    employee_id: UserId,
    supervisor_id: UserId,
    status: ParticipantStatus,
    self_assessment: Option<SelfAssessment>,
    manager_assessment: Option<ManagerAssessment>,
    final_score: Option<Decimal>,
}

impl ReviewParticipant {
    pub(super) fn new(employee_id: UserId, supervisor_id: UserId) -> Self {
        Self {
            id: ParticipantId::new(),
            employee_id,
            supervisor_id,
            status: ParticipantStatus::Pending,
            self_assessment: None,
            manager_assessment: None,
            final_score: None,
        }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn employee_id(&self) -> UserId {
        self.employee_id
    }

    pub fn supervisor_id(&self) -> UserId {
        self.supervisor_id
    }

    pub fn status(&self) -> ParticipantStatus {
        self.status
    }

    pub fn self_assessment(&self) -> Option<&SelfAssessment> {
        self.self_assessment.as_ref()
    }

    pub fn manager_assessment(&self) -> Option<&ManagerAssessment> {
        self.manager_assessment.as_ref()
    }

    pub fn final_score(&self) -> Option<Decimal> {
        self.final_score
    }

    pub fn has_self_assessment(&self) -> bool {
        self.self_assessment.is_some()
    }

    pub fn has_manager_assessment(&self) -> bool {
        self.manager_assessment.is_some()
    }

    pub(super) fn attach_self_assessment(&mut self, assessment: SelfAssessment) {
        self.self_assessment = Some(assessment);
        self.status = ParticipantStatus::SelfAssessmentSubmitted;
    }

    /// Attaches the manager's verdict and the derived final score in one step;
    /// the two always change together.
    pub(super) fn attach_manager_assessment(
        &mut self,
        assessment: ManagerAssessment,
        final_score: Decimal,
    ) {
        self.manager_assessment = Some(assessment);
        self.final_score = Some(final_score);
        self.status = ParticipantStatus::ManagerAssessmentSubmitted;
    }

    pub(super) fn mark_completed(&mut self) {
        self.status = ParticipantStatus::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::assessment::AssessmentScore;
    use crate::domain::review::ids::KpiId;
    use rust_decimal_macros::dec;

    fn scores() -> Vec<AssessmentScore> {
        vec![AssessmentScore::new(KpiId::new(), dec!(4.0), dec!(85), None).unwrap()]
    }

    #[test]
    fn test_new_participant_is_pending() {
        let participant = ReviewParticipant::new(UserId::new(), UserId::new());

        assert_eq!(participant.status(), ParticipantStatus::Pending);
        assert!(!participant.has_self_assessment());
        assert!(!participant.has_manager_assessment());
        assert!(participant.final_score().is_none());
    }

    #[test]
    fn test_manager_assessment_and_final_score_set_together() {
        let mut participant = ReviewParticipant::new(UserId::new(), UserId::new());
        participant
            .attach_self_assessment(SelfAssessment::new(scores(), None, None).unwrap());
        assert_eq!(
            participant.status(),
            ParticipantStatus::SelfAssessmentSubmitted
        );

        let assessment = ManagerAssessment::new(scores(), None).unwrap();
        participant.attach_manager_assessment(assessment, dec!(4.00));

        assert_eq!(
            participant.status(),
            ParticipantStatus::ManagerAssessmentSubmitted
        );
        assert_eq!(participant.final_score(), Some(dec!(4.00)));
        assert!(participant.has_manager_assessment());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ParticipantStatus::Pending.to_string(), "PENDING");
        assert_eq!(
            ParticipantStatus::ManagerAssessmentSubmitted.to_string(),
            "MANAGER_ASSESSMENT_SUBMITTED"
        );
    }
}
