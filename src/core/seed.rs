//! Built-in sample experiences.
//!
//! Used by `--offline` mode and as a fixture in tests.

use crate::core::experience::{ExperienceId, InterviewExperience, Verdict};

fn record(
    id: u64,
    company: &str,
    role: &str,
    verdict: Verdict,
    candidate: &str,
    content: &str,
) -> InterviewExperience {
    InterviewExperience {
        id: ExperienceId::from(id),
        company: company.to_string(),
        role: role.to_string(),
        verdict,
        candidate: candidate.to_string(),
        content: content.to_string(),
    }
}

/// The five sample experiences, in display order.
pub fn sample_experiences() -> Vec<InterviewExperience> {
    vec![
        record(
            1,
            "Google",
            "Software Engineer",
            Verdict::Selected,
            "John Doe",
            "The interview process was thorough and challenging. Started with a phone screen \
             focusing on data structures, followed by multiple onsite rounds covering algorithms, \
             system design, and behavioral questions. The interviewers were very professional and \
             gave hints when I was stuck. Key advice: practice system design extensively and be \
             ready to explain your thought process clearly. The coding questions were medium to \
             hard level, mostly involving trees and dynamic programming.",
        ),
        record(
            2,
            "Microsoft",
            "SDE II",
            Verdict::Selected,
            "Jane Smith",
            "Great experience overall. The interviewers were friendly and the questions were fair. \
             Heavy focus on problem-solving and coding skills with some system design discussions. \
             Had 4 rounds total - 2 coding rounds, 1 system design, and 1 behavioral. The coding \
             questions were well-balanced and tested different aspects of programming. Make sure \
             to communicate your approach before diving into code.",
        ),
        record(
            3,
            "Amazon",
            "Software Development Engineer",
            Verdict::Rejected,
            "Mike Johnson",
            "The process was well-structured but quite intense. Leadership Principles questions \
             were heavily emphasized along with coding challenges. Unfortunately didn't make it \
             past the final round due to a system design question I couldn't complete in time. \
             Advice: Study Amazon's Leadership Principles thoroughly and practice system design \
             under time pressure.",
        ),
        record(
            4,
            "Meta",
            "Software Engineer E4",
            Verdict::Selected,
            "Sarah Chen",
            "Challenging but fair interview process. Strong emphasis on coding efficiency, system \
             design at scale, and cultural fit. The behavioral rounds were particularly important \
             and they really dig deep into past experiences. Technical rounds included coding \
             problems focused on algorithms and data structures, plus a system design round for \
             scalability challenges.",
        ),
        record(
            5,
            "Netflix",
            "Senior Software Engineer",
            Verdict::Pending,
            "Alex Rodriguez",
            "Unique interview process focused heavily on real-world problem solving and \
             scalability challenges. Less focus on traditional algorithmic questions and more on \
             practical engineering problems. Still waiting for the final decision but the \
             experience was refreshing compared to other tech companies.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let samples = sample_experiences();
        let ids: HashSet<_> = samples.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), samples.len());
    }

    #[test]
    fn test_sample_order() {
        let companies: Vec<_> = sample_experiences()
            .into_iter()
            .map(|e| e.company)
            .collect();
        assert_eq!(
            companies,
            vec!["Google", "Microsoft", "Amazon", "Meta", "Netflix"]
        );
    }
}
