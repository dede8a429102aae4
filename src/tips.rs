//! Hint-modal tips shown on protected-code violations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub message: &'static str,
}

pub const TIPS: [Tip; 8] = [
    Tip {
        title: "Atenção: Área Protegida!",
        message: "Você está modificando o código protegido! Altere apenas os NÚMEROS dentro de 'params', na parte superior do código.",
    },
    Tip {
        title: "Cuidado: Código Protegido!",
        message: "Não mexa nas funções! Você só deve alterar os valores numéricos dentro do objeto 'params'. Todo o resto deve permanecer intacto.",
    },
    Tip {
        title: "Ops! Local Errado!",
        message: "Você está editando a parte errada do código. Foque apenas nos parâmetros no topo: velocidade, ângulo, massa, etc. Não altere as fórmulas!",
    },
    Tip {
        title: "Zona Restrita!",
        message: "As funções de simulação não podem ser modificadas. Concentre-se apenas em ajustar os valores dentro de 'params' para experimentar diferentes resultados.",
    },
    Tip {
        title: "Área Bloqueada!",
        message: "Você tocou no código protegido! Lembre-se: altere APENAS os números dentro de 'params'. As equações físicas devem permanecer como estão.",
    },
    Tip {
        title: "Atenção ao Local!",
        message: "Modifique somente a seção de parâmetros! Os cálculos físicos abaixo não devem ser alterados, apenas os valores iniciais como massa, velocidade e ângulo.",
    },
    Tip {
        title: "Erro de Localização!",
        message: "Você está editando onde não deveria! Volte para o topo do código e altere apenas os números dentro de 'params'. É só isso que você precisa mudar!",
    },
    Tip {
        title: "Só os Parâmetros!",
        message: "Fique na zona segura! Altere apenas os valores numéricos dentro de 'params'. Todo o código de simulação abaixo deve permanecer inalterado.",
    },
];

/// Uniform tip picker. Seedable so tests (and replayable sessions) are
/// deterministic; the web app seeds it from the wall clock.
#[derive(Debug, Clone)]
pub struct TipPicker {
    seed: u64,
}

impl TipPicker {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn pick(&mut self) -> Tip {
        TIPS[self.next_index()]
    }

    fn next_index(&mut self) -> usize {
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        ((self.seed >> 33) as usize) % TIPS.len()
    }
}
