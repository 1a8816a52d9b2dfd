//! Rules that move the property detail page from its inline contact card to the
//! shared `InquiryForm` component.

use crate::{patch::Patch, rules::Replacement};

pub const INQUIRY_FORM_IMPORT: &str =
    "import InquiryForm from '@/components/properties/InquiryForm';\n";

const IMPORT_ANCHOR: &str = "import FavoriteButton from '@/components/properties/FavoriteButton';\nimport Header from '@/components/layout/Header';";

const IMPORT_WITH_INQUIRY_FORM: &str = "import FavoriteButton from '@/components/properties/FavoriteButton';\nimport InquiryForm from '@/components/properties/InquiryForm';\nimport Header from '@/components/layout/Header';";

const CONTACT_FORM_STATE: &str = "  const [currentImageIndex, setCurrentImageIndex] = useState(0);\n  const [showContactForm, setShowContactForm] = useState(false);";

const IMAGE_INDEX_STATE: &str = "  const [currentImageIndex, setCurrentImageIndex] = useState(0);";

const CONTACT_CARD_SIDEBAR: &str = r#"          {/* Sidebar */}
          <div className="space-y-6">
            {/* Contact Card */}
            <div className="bg-white rounded-lg shadow p-6">
              <h2 className="text-xl font-bold text-gray-900 mb-4">Contact Agent</h2>
              <button
                onClick={() => setShowContactForm(!showContactForm)}
                className="w-full bg-primary-600 text-white py-3 rounded-lg hover:bg-primary-700 font-semibold"
              >
                Request Information
              </button>
              
              {showContactForm && (
                <form className="mt-4 space-y-4">
                  <input
                    type="text"
                    placeholder="Your Name"
                    className="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent"
                  />
                  <input
                    type="email"
                    placeholder="Your Email"
                    className="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent"
                  />
                  <input
                    type="tel"
                    placeholder="Your Phone"
                    className="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent"
                  />
                  <textarea
                    placeholder="Message"
                    rows={4}
                    className="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent"
                    defaultValue={`I'm interested in ${property.title}`}
                  />
                  <button
                    type="submit"
                    className="w-full bg-gray-900 text-white py-2 rounded-lg hover:bg-gray-800"
                  >
                    Send Message
                  </button>
                </form>
              )}
            </div>"#;

const INQUIRY_FORM_SIDEBAR: &str = r#"          {/* Sidebar */}
          <div className="space-y-6">
            {/* Inquiry Form */}
            <InquiryForm propertyId={property._id} propertyTitle={property.title} />"#;

static RULES: [Replacement; 3] = [
    // The anchor survives the insertion, so guard against a second import.
    Replacement::new(
        "add-inquiry-form-import",
        IMPORT_ANCHOR,
        IMPORT_WITH_INQUIRY_FORM,
    )
    .unless_present(INQUIRY_FORM_IMPORT),
    Replacement::new(
        "remove-contact-form-state",
        CONTACT_FORM_STATE,
        IMAGE_INDEX_STATE,
    ),
    Replacement::new(
        "replace-contact-card",
        CONTACT_CARD_SIDEBAR,
        INQUIRY_FORM_SIDEBAR,
    ),
];

pub fn patch() -> Patch {
    Patch::new(&RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleOutcome;
    use pretty_assertions::assert_eq;

    #[test]
    fn inserts_import_between_anchor_lines() {
        let input = "import FavoriteButton from '@/components/properties/FavoriteButton';\n\
                     import Header from '@/components/layout/Header';\n";
        let patched = patch().apply(input);
        assert_eq!(
            patched.content,
            "import FavoriteButton from '@/components/properties/FavoriteButton';\n\
             import InquiryForm from '@/components/properties/InquiryForm';\n\
             import Header from '@/components/layout/Header';\n"
        );
    }

    #[test]
    fn rerun_does_not_duplicate_import() {
        let once = patch().apply(IMPORT_ANCHOR).content;
        let twice = patch().apply(&once);
        assert_eq!(twice.content, once);
        assert_eq!(twice.outcomes[0].1, RuleOutcome::AlreadyApplied);
        assert_eq!(once.matches(INQUIRY_FORM_IMPORT).count(), 1);
    }

    #[test]
    fn removes_only_the_contact_form_state() {
        let input = format!("{CONTACT_FORM_STATE}\n\n  useEffect(() => {{}});\n");
        let patched = patch().apply(&input);
        assert_eq!(
            patched.content,
            "  const [currentImageIndex, setCurrentImageIndex] = useState(0);\n\n  useEffect(() => {});\n"
        );
    }

    #[test]
    fn state_line_elsewhere_is_kept() {
        // Only the two-line sequence is an anchor.
        let input = "  const [showContactForm, setShowContactForm] = useState(false);\n";
        let patched = patch().apply(input);
        assert_eq!(patched.content, input);
        assert_eq!(patched.outcomes[1].1, RuleOutcome::NotFound);
    }

    #[test]
    fn replaces_contact_card() {
        let input = format!("        </div>\n\n{CONTACT_CARD_SIDEBAR}\n          </div>\n");
        let patched = patch().apply(&input);
        assert_eq!(
            patched.content,
            format!("        </div>\n\n{INQUIRY_FORM_SIDEBAR}\n          </div>\n")
        );
        assert!(!patched.content.contains("showContactForm"));
    }

    #[test]
    fn rules_are_ordered() {
        let names: Vec<_> = patch().rules().iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            vec![
                "add-inquiry-form-import",
                "remove-contact-form-state",
                "replace-contact-card"
            ]
        );
    }
}
