//! Static content for the page: FAQ entries, symptom cards, methodology
//! steps and testimonials. Supplied once at load time and immutable; the
//! FAQ accordion references entries by their position in this list.

use yew::prelude::*;

use crate::components::icons::Icon;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: Html,
}

pub struct SymptomCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: Html,
}

pub struct MethodStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: Html,
}

pub struct Testimonial {
    pub quote: Html,
    pub author: &'static str,
    pub focus: &'static str,
}

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Como funciona a sessão de alinhamento?",
            answer: html! {
                <p>
                    {"É o nosso primeiro contato (cortesia) para entendermos se "}
                    <strong>{"você está pronta para o meu método"}</strong>
                    {" e se eu sou a profissional certa para o seu caso."}
                </p>
            },
        },
        FaqEntry {
            question: "O atendimento é presencial?",
            answer: html! {
                <p>
                    {"Não, o atendimento é "}
                    <strong class="highlight">{"100% online por vídeo"}</strong>
                    {", permitindo que você seja acolhida no conforto e privacidade do seu lar."}
                </p>
            },
        },
        FaqEntry {
            question: "Preciso de um diagnóstico médico?",
            answer: html! {
                <p>
                    {"Não. Atendo pessoas que sofrem com dores físicas, "}
                    <em class="underlined">{"mesmo que os exames não apontem causas orgânicas claras."}</em>
                </p>
            },
        },
        FaqEntry {
            question: "Quanto tempo dura o tratamento?",
            answer: html! {
                <p>
                    {"Terapia profunda é um processo contínuo. Não trabalhamos com \"número de sessões\", mas com a "}
                    <strong class="underlined">{"evolução da sua consciência"}</strong>
                    {" e alívio da dor."}
                </p>
            },
        },
    ]
}

pub fn symptom_cards() -> Vec<SymptomCard> {
    vec![
        SymptomCard {
            icon: Icon::Activity,
            title: "Dores Crônicas",
            description: html! {
                <>
                    {"Convive com "}
                    <strong>{"Fibromialgia"}</strong>
                    {" ou tensões que "}
                    <em class="underlined">{"nenhum exame médico explica"}</em>
                    {"?"}
                </>
            },
        },
        SymptomCard {
            icon: Icon::Anchor,
            title: "Peso do Passado",
            description: html! {
                <>
                    {"Sente que carrega um "}
                    <strong class="highlight">{"fardo emocional"}</strong>
                    {" que \"trava\" seus movimentos e sua vida?"}
                </>
            },
        },
        SymptomCard {
            icon: Icon::RotateCcw,
            title: "Frustração Acumulada",
            description: html! {
                <>
                    {"Já tentou de tudo, de remédios a terapias superficiais, mas "}
                    <strong>{"a dor sempre volta"}</strong>
                    {"?"}
                </>
            },
        },
        SymptomCard {
            icon: Icon::CloudFog,
            title: "Desânimo Existencial",
            description: html! {
                <>
                    {"Perdeu a cor da vida após uma "}
                    <em class="underlined">{"grande decepção"}</em>
                    {" ou perda de rumo?"}
                </>
            },
        },
    ]
}

pub fn method_steps() -> Vec<MethodStep> {
    vec![
        MethodStep {
            number: "01",
            title: "Conexão Corpo-Emoção",
            description: html! {
                <>
                    {"Entender como sua "}
                    <span class="accent">{"história de vida"}</span>
                    {" está escrita na sua biologia."}
                </>
            },
        },
        MethodStep {
            number: "02",
            title: "Enfrentamento Consciente",
            description: html! {
                <>
                    {"Olhar de frente para "}
                    <span class="accent">{"traumas antigos"}</span>
                    {" com o suporte de quem já fez essa travessia."}
                </>
            },
        },
        MethodStep {
            number: "03",
            title: "Cura com Responsabilidade",
            description: html! {
                <>
                    {"Aqui não prometo milagres rápidos. Prometo um caminho que "}
                    <span class="accent-box">{"exige constante disciplina"}</span>
                    {"."}
                </>
            },
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: html! {
                <>
                    {"A dor física que eu sentia há anos "}
                    <strong>{"começou a ceder"}</strong>
                    {" quando entendi o que estava carregando."}
                </>
            },
            author: "Paciente M.",
            focus: "Alívio de dor física",
        },
        Testimonial {
            quote: html! {
                <>
                    {"Eu achava que nunca mais seria a mesma depois do trauma. O processo "}
                    <strong>{"me devolveu a mim mesma."}</strong>
                </>
            },
            author: "Paciente A.",
            focus: "Superação de trauma",
        },
        Testimonial {
            quote: html! {
                <>
                    {"Parei de procurar pílulas mágicas e "}
                    <strong class="highlight">{"assumi a responsabilidade"}</strong>
                    {" pela minha cura."}
                </>
            },
            author: "Paciente R.",
            focus: "Retomada da autonomia",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_has_four_entries_in_fixed_order() {
        let entries = faq_entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].question, "Como funciona a sessão de alinhamento?");
        assert_eq!(entries[3].question, "Quanto tempo dura o tratamento?");
    }

    #[test]
    fn faq_questions_are_unique() {
        let entries = faq_entries();
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                assert_ne!(a.question, b.question);
            }
        }
    }

    #[test]
    fn section_lists_have_expected_sizes() {
        assert_eq!(symptom_cards().len(), 4);
        assert_eq!(method_steps().len(), 3);
        assert_eq!(testimonials().len(), 3);
    }
}
