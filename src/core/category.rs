use crate::models::MatchCategory;

/// Map a match score to its qualitative bucket
///
/// Bands are evaluated in descending order, so exactly one applies:
/// 80+ Excellent, 60-79 Good, 40-59 Fair, below 40 Low.
pub fn match_category(score: u8) -> MatchCategory {
    if score >= 80 {
        MatchCategory {
            label: "Excellent Match",
            description: "This role aligns very closely with the candidate's profile.",
        }
    } else if score >= 60 {
        MatchCategory {
            label: "Good Match",
            description: "The candidate meets most of the role's requirements.",
        }
    } else if score >= 40 {
        MatchCategory {
            label: "Fair Match",
            description: "The candidate meets some of the role's requirements.",
        }
    } else {
        MatchCategory {
            label: "Low Match",
            description: "This role is unlikely to be a good fit for the candidate.",
        }
    }
}
