use crate::entities::*;

pub trait Chronological {
    fn sort_chronologically(&mut self);
}

impl Chronological for [Comment] {
    fn sort_chronologically(&mut self) {
        // The id is time ordered itself and breaks ties.
        self.sort_unstable_by(|a, b| {
            a.created_on
                .cmp(&b.created_on)
                .then_with(|| a.id.cmp(&b.id))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silly_entities::builders::Builder;

    fn comment(id: &str) -> Comment {
        Comment::new(id.parse().unwrap(), NewComment::build().finish())
    }

    #[test]
    fn sort_by_creation_time() {
        let mut comments = vec![
            comment("01GFJND5Z80000000000000000"),
            comment("01ARYZ6S410000000000000000"),
            comment("01GFJND5000000000000000001"),
        ];
        comments.sort_chronologically();
        assert!(comments
            .windows(2)
            .all(|w| w[0].created_on <= w[1].created_on));
        assert_eq!(comments[0].id.to_string(), "01ARYZ6S410000000000000000");
    }

    #[test]
    fn break_ties_by_id() {
        let mut comments = vec![
            comment("01GFJND5000000000000000002"),
            comment("01GFJND5000000000000000001"),
        ];
        assert_eq!(comments[0].created_on, comments[1].created_on);
        comments.sort_chronologically();
        assert_eq!(comments[0].id.to_string(), "01GFJND5000000000000000001");
        assert_eq!(comments[1].id.to_string(), "01GFJND5000000000000000002");
    }
}
